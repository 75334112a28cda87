//! Instructor data models and DTOs.
//!
//! Re-exports the instructor models from the `lectern-models` crate.

pub use lectern_models::instructors::*;
