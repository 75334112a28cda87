//! Lecture domain models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A lecture belonging to a course.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Lecture {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub content: String,
}

/// DTO for adding a lecture to a course.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLectureDto {
    #[validate(range(min = 1))]
    pub course_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
}

/// DTO for updating a lecture's title and content.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLectureDto {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
}
