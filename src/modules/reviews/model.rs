//! Review data models and DTOs.
//!
//! Re-exports the review models from the `lectern-models` crate.

pub use lectern_models::reviews::*;
