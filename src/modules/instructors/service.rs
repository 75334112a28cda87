use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use lectern_core::{AppError, hash_password, verify_password};

use crate::modules::instructors::model::{
    Instructor, InstructorAccount, RegisterInstructorDto, UpdateInstructorDto,
};

pub struct InstructorService;

impl InstructorService {
    #[instrument(skip(db))]
    pub async fn find_by_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<InstructorAccount>, AppError> {
        sqlx::query_as::<_, InstructorAccount>(
            "SELECT id, name, email, password FROM instructors WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch instructor by email")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn register(
        db: &PgPool,
        dto: &RegisterInstructorDto,
    ) -> Result<Instructor, AppError> {
        if Self::find_by_email(db, &dto.email).await?.is_some() {
            return Err(AppError::conflict(
                "An instructor with this email already exists",
            ));
        }

        let hashed_password = hash_password(&dto.password)?;

        let instructor = sqlx::query_as::<_, Instructor>(
            r#"
            INSERT INTO instructors (name, email, password)
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
                    return AppError::conflict("An instructor with this email already exists");
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(instructor)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: i64) -> Result<Instructor, AppError> {
        sqlx::query_as::<_, Instructor>("SELECT id, name, email FROM instructors WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch instructor by id")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found("Instructor not found"))
    }

    /// Partial profile update. Changing the password requires the current
    /// one to match.
    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: i64,
        dto: UpdateInstructorDto,
    ) -> Result<Instructor, AppError> {
        let existing = sqlx::query_as::<_, InstructorAccount>(
            "SELECT id, name, email, password FROM instructors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch instructor by id")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Instructor not found"))?;

        let name = dto.name.unwrap_or(existing.name);
        let email = dto.email.unwrap_or(existing.email);
        let password = match dto.new_password {
            Some(new_password) => {
                let current = dto.current_password.unwrap_or_default();
                if !verify_password(&current, &existing.password)? {
                    return Err(AppError::bad_request("Current password is incorrect"));
                }
                hash_password(&new_password)?
            }
            None => existing.password,
        };

        sqlx::query_as::<_, Instructor>(
            r#"
            UPDATE instructors
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
                    return AppError::conflict("An instructor with this email already exists");
                }
            }
            AppError::database(anyhow::Error::from(e))
        })
    }
}
