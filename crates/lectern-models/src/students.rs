//! Student domain models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A student profile as returned by the API. Never carries the password.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A student row including the password hash. Internal to the service
/// layer; used for login and profile updates.
#[derive(Debug, FromRow)]
pub struct StudentAccount {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// DTO for student registration.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterStudentDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// DTO for updating a student profile. Only provided fields change.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentProfileDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 6))]
    pub password: Option<String>,
}
