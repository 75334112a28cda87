//! Instructor domain models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// An instructor profile as returned by the API. Never carries the password.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Instructor {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// An instructor row including the password hash. Internal to the service
/// layer; used for login and profile updates.
#[derive(Debug, FromRow)]
pub struct InstructorAccount {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// DTO for instructor registration.
///
/// Instructor names allow letters, digits, whitespace, hyphens and
/// apostrophes only.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterInstructorDto {
    #[validate(
        length(min = 2, max = 255),
        custom(function = validate_name_charset)
    )]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// DTO for updating an instructor profile. Changing the password requires
/// the current one.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInstructorDto {
    #[validate(
        length(min = 2, max = 255),
        custom(function = validate_name_charset)
    )]
    pub name: Option<String>,
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    pub current_password: Option<String>,
    #[validate(length(min = 6))]
    pub new_password: Option<String>,
}

fn validate_name_charset(name: &str) -> Result<(), ValidationError> {
    let valid = !name.trim().is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c.is_whitespace() || c == '\'' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("name_charset"))
    }
}
