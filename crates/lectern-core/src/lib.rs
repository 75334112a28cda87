//! # Lectern Core
//!
//! Core types, errors, and utilities for the Lectern API.
//!
//! This crate provides foundational types used throughout the Lectern application:
//!
//! - [`errors`]: Application error types with HTTP response conversion
//! - [`password`]: Secure password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use lectern_core::errors::AppError;
//! use lectern_core::password::{hash_password, verify_password};
//!
//! // Create an error
//! let error = AppError::not_found("Course not found");
//!
//! // Hash a password
//! let hash = hash_password("secure_password")?;
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
