//! Enrollment DTOs.
//!
//! Re-exports the enrollment models from the `lectern-models` crate.

pub use lectern_models::enrollments::*;
