use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use lectern_core::{AppError, hash_password};

use crate::modules::students::model::{
    RegisterStudentDto, Student, StudentAccount, UpdateStudentProfileDto,
};

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn find_by_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<StudentAccount>, AppError> {
        sqlx::query_as::<_, StudentAccount>(
            "SELECT id, name, email, password FROM students WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch student by email")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn register(db: &PgPool, dto: &RegisterStudentDto) -> Result<Student, AppError> {
        if Self::find_by_email(db, &dto.email).await?.is_some() {
            return Err(AppError::conflict(
                "A student with this email already exists",
            ));
        }

        let hashed_password = hash_password(&dto.password)?;

        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict("A student with this email already exists");
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: i64) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>("SELECT id, name, email FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch student by id")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(format!("Student with id {} not found", id)))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_profile(
        db: &PgPool,
        id: i64,
        dto: UpdateStudentProfileDto,
    ) -> Result<Student, AppError> {
        let existing = sqlx::query_as::<_, StudentAccount>(
            "SELECT id, name, email, password FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch student by id")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(format!("Student with id {} not found", id)))?;

        let name = dto.name.unwrap_or(existing.name);
        let email = dto.email.unwrap_or(existing.email);
        let password = match dto.password {
            Some(plain) => hash_password(&plain)?,
            None => existing.password,
        };

        sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET name = $1, email = $2, password = $3
            WHERE id = $4
            RETURNING id, name, email
            "#,
        )
        .bind(&name)
        .bind(&email)
        .bind(&password)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict("A student with this email already exists");
                }
            }
            AppError::database(anyhow::Error::from(e))
        })
    }
}
