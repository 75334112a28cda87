use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use lectern_core::AppError;

use crate::modules::courses::model::{Course, CreateCourseDto, UpdateCourseDto};

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn list_all(db: &PgPool) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>(
            "SELECT id, name, description, instructor_id FROM courses ORDER BY id",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch courses")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: i64) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(
            "SELECT id, name, description, instructor_id FROM courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch course by id")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(format!("Course with id {} not found", id)))
    }

    /// Creates a course inside a transaction. A duplicate name is a
    /// conflict; an unknown instructor is a bad request.
    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: &CreateCourseDto) -> Result<Course, AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (name, description, instructor_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, instructor_id
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.instructor_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict("A course with this name already exists");
                }
                if db_err.is_foreign_key_violation() {
                    return AppError::bad_request(format!(
                        "Instructor with id {} does not exist",
                        dto.instructor_id
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        tx.commit()
            .await
            .context("Failed to commit transaction")
            .map_err(AppError::database)?;

        Ok(course)
    }

    /// Updates name and description inside a transaction, refusing a name
    /// another course already uses.
    #[instrument(skip(db, dto))]
    pub async fn update(db: &PgPool, id: i64, dto: &UpdateCourseDto) -> Result<Course, AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let duplicate: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM courses WHERE name = $1 AND id != $2")
                .bind(&dto.name)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .context("Failed to check for duplicate course name")
                .map_err(AppError::database)?;

        if duplicate.is_some() {
            return Err(AppError::conflict("A course with this name already exists"));
        }

        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET name = $1, description = $2
            WHERE id = $3
            RETURNING id, name, description, instructor_id
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to update course")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(format!("Course with id {} not found", id)))?;

        tx.commit()
            .await
            .context("Failed to commit transaction")
            .map_err(AppError::database)?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete course")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Course with id {} not found",
                id
            )));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn by_instructor(db: &PgPool, instructor_id: i64) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>(
            "SELECT id, name, description, instructor_id FROM courses WHERE instructor_id = $1",
        )
        .bind(instructor_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch courses by instructor")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn search(db: &PgPool, keyword: &str) -> Result<Vec<Course>, AppError> {
        let pattern = format!("%{}%", keyword);

        sqlx::query_as::<_, Course>(
            r#"
            SELECT id, name, description, instructor_id
            FROM courses
            WHERE name ILIKE $1 OR description ILIKE $1
            "#,
        )
        .bind(&pattern)
        .fetch_all(db)
        .await
        .context("Failed to search courses")
        .map_err(AppError::database)
    }

    /// Up to 5 random courses the student is not enrolled in.
    #[instrument(skip(db))]
    pub async fn recommended_for_student(
        db: &PgPool,
        student_id: i64,
    ) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.name, c.description, c.instructor_id
            FROM courses c
            WHERE c.id NOT IN (
                SELECT e.course_id
                FROM enrollments e
                WHERE e.student_id = $1
            )
            ORDER BY RANDOM()
            LIMIT 5
            "#,
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch recommended courses")
        .map_err(AppError::database)
    }
}
