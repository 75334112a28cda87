//! Enrollment DTOs.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// DTO for enrolling a student in a course.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EnrollmentDto {
    #[validate(range(min = 1))]
    pub student_id: i64,
    #[validate(range(min = 1))]
    pub course_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrollment_requires_both_ids() {
        let ok = EnrollmentDto {
            student_id: 1,
            course_id: 2,
        };
        assert!(ok.validate().is_ok());

        let missing = EnrollmentDto {
            student_id: 0,
            course_id: 2,
        };
        assert!(missing.validate().is_err());
    }
}
