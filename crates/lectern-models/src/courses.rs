//! Course domain models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A course in the catalog.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub instructor_id: i64,
}

/// DTO for creating a course.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1))]
    pub instructor_id: i64,
}

/// DTO for updating a course. Both fields are required; partial updates
/// are not supported for courses.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
}

/// Query parameters for course search.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    pub keyword: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_course_dto_validation() {
        let ok = CreateCourseDto {
            name: "Rust 101".to_string(),
            description: "Ownership without tears".to_string(),
            instructor_id: 1,
        };
        assert!(ok.validate().is_ok());

        let no_name = CreateCourseDto {
            name: String::new(),
            description: "desc".to_string(),
            instructor_id: 1,
        };
        assert!(no_name.validate().is_err());

        let no_instructor = CreateCourseDto {
            name: "Rust 101".to_string(),
            description: "desc".to_string(),
            instructor_id: 0,
        };
        assert!(no_instructor.validate().is_err());
    }

    #[test]
    fn test_update_course_dto_name_too_long() {
        let dto = UpdateCourseDto {
            name: "x".repeat(256),
            description: "desc".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
