//! Authentication DTOs shared by the student and instructor modules.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Login request for both students and instructors.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response to a successful registration or login: the account plus a
/// freshly issued bearer credential.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub token: String,
}
