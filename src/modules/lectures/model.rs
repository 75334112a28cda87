//! Lecture data models and DTOs.
//!
//! Re-exports the lecture models from the `lectern-models` crate.

pub use lectern_models::lectures::*;
