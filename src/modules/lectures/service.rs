use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use lectern_core::AppError;

use crate::modules::lectures::model::{CreateLectureDto, Lecture, UpdateLectureDto};

pub struct LectureService;

impl LectureService {
    #[instrument(skip(db, dto))]
    pub async fn add_to_course(db: &PgPool, dto: &CreateLectureDto) -> Result<Lecture, AppError> {
        sqlx::query_as::<_, Lecture>(
            r#"
            INSERT INTO lectures (course_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, course_id, title, content
            "#,
        )
        .bind(dto.course_id)
        .bind(&dto.title)
        .bind(&dto.content)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::bad_request(format!(
                        "Course with id {} does not exist",
                        dto.course_id
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })
    }

    #[instrument(skip(db))]
    pub async fn by_course(db: &PgPool, course_id: i64) -> Result<Vec<Lecture>, AppError> {
        sqlx::query_as::<_, Lecture>(
            "SELECT id, course_id, title, content FROM lectures WHERE course_id = $1 ORDER BY id",
        )
        .bind(course_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch lectures by course")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_content(db: &PgPool, id: i64) -> Result<Lecture, AppError> {
        sqlx::query_as::<_, Lecture>(
            "SELECT id, course_id, title, content FROM lectures WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch lecture content")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(format!("Lecture with id {} not found", id)))
    }

    #[instrument(skip(db, dto))]
    pub async fn update(db: &PgPool, id: i64, dto: &UpdateLectureDto) -> Result<Lecture, AppError> {
        sqlx::query_as::<_, Lecture>(
            r#"
            UPDATE lectures
            SET title = $1, content = $2
            WHERE id = $3
            RETURNING id, course_id, title, content
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to update lecture")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(format!("Lecture with id {} not found", id)))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM lectures WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete lecture")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Lecture with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
