use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use lectern_core::AppError;

use crate::modules::reviews::model::{CreateReviewDto, Review};

pub struct ReviewService;

impl ReviewService {
    #[instrument(skip(db, dto))]
    pub async fn add(db: &PgPool, dto: &CreateReviewDto) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (student_id, course_id, comment, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING id, student_id, course_id, comment, rating, created_at
            "#,
        )
        .bind(dto.student_id)
        .bind(dto.course_id)
        .bind(&dto.comment)
        .bind(dto.rating)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::bad_request("Student or course does not exist");
                }
            }
            AppError::database(anyhow::Error::from(e))
        })
    }

    #[instrument(skip(db))]
    pub async fn by_course(db: &PgPool, course_id: i64) -> Result<Vec<Review>, AppError> {
        sqlx::query_as::<_, Review>(
            r#"
            SELECT id, student_id, course_id, comment, rating, created_at
            FROM reviews
            WHERE course_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(course_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch reviews by course")
        .map_err(AppError::database)
    }
}
