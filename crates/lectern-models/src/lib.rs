//! # Lectern Models
//!
//! Domain models and DTOs for the Lectern API.
//!
//! One module per domain, each containing the database entity plus the
//! request/response DTOs for that domain's operations:
//!
//! - [`auth`]: login request and authentication response shared by
//!   students and instructors
//! - [`courses`]: courses and their create/update/search DTOs
//! - [`students`]: student accounts and profile DTOs
//! - [`instructors`]: instructor accounts and profile DTOs
//! - [`enrollments`]: student-course enrollment DTOs
//! - [`lectures`]: lectures and their DTOs
//! - [`reviews`]: course reviews and their DTOs

pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod instructors;
pub mod lectures;
pub mod reviews;
pub mod students;
