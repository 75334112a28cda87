//! Student data models and DTOs.
//!
//! Re-exports the student models from the `lectern-models` crate.

pub use lectern_models::students::*;
