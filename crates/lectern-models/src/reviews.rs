//! Course review models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A student's review of a course.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Review {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

/// DTO for adding a review to a course. Rating is a 1-5 scale.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewDto {
    #[validate(range(min = 1))]
    pub student_id: i64,
    #[validate(range(min = 1))]
    pub course_id: i64,
    pub comment: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        let mut dto = CreateReviewDto {
            student_id: 1,
            course_id: 1,
            comment: "solid course".to_string(),
            rating: 5,
        };
        assert!(dto.validate().is_ok());

        dto.rating = 0;
        assert!(dto.validate().is_err());

        dto.rating = 6;
        assert!(dto.validate().is_err());
    }
}
