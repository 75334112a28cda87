use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use lectern_core::AppError;
use lectern_models::courses::Course;
use lectern_models::students::Student;

pub struct EnrollmentService;

impl EnrollmentService {
    /// Enrolls a student in a course. Enrolling twice is a no-op.
    #[instrument(skip(db))]
    pub async fn enroll(db: &PgPool, student_id: i64, course_id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO enrollments (student_id, course_id)
            VALUES ($1, $2)
            ON CONFLICT (student_id, course_id) DO NOTHING
            "#,
        )
        .bind(student_id)
        .bind(course_id)
        .execute(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::bad_request("Student or course does not exist");
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn unenroll(db: &PgPool, student_id: i64, course_id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM enrollments WHERE student_id = $1 AND course_id = $2")
            .bind(student_id)
            .bind(course_id)
            .execute(db)
            .await
            .context("Failed to remove enrollment")
            .map_err(AppError::database)?;

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn students_by_course(
        db: &PgPool,
        course_id: i64,
    ) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT s.id, s.name, s.email
            FROM students s
            JOIN enrollments e ON s.id = e.student_id
            WHERE e.course_id = $1
            "#,
        )
        .bind(course_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch students by course")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn courses_by_student(
        db: &PgPool,
        student_id: i64,
    ) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.name, c.description, c.instructor_id
            FROM courses c
            JOIN enrollments e ON c.id = e.course_id
            WHERE e.student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch courses by student")
        .map_err(AppError::database)
    }
}
