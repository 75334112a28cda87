use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use validator::Validate;

use lectern_auth::{Role, issue_token};
use lectern_core::{AppError, verify_password};
use lectern_models::auth::{AuthResponse, LoginDto};
use lectern_models::courses::Course;

use crate::docs::ErrorResponse;
use crate::middleware::auth::AuthUser;
use crate::modules::courses::service::CourseService;
use crate::modules::instructors::model::{
    Instructor, RegisterInstructorDto, UpdateInstructorDto,
};
use crate::modules::instructors::service::InstructorService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/instructors/register",
    request_body = RegisterInstructorDto,
    responses(
        (status = 200, description = "Instructor registered successfully", body = AuthResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Instructors"
)]
#[instrument(skip(state, dto))]
pub async fn register_instructor(
    State(state): State<AppState>,
    Json(dto): Json<RegisterInstructorDto>,
) -> Result<Json<AuthResponse>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let instructor = InstructorService::register(&state.db, &dto).await?;
    let token = issue_token(
        instructor.id,
        &instructor.email,
        Role::Instructor,
        &state.jwt_config,
    )?;

    tracing::info!(instructor_id = instructor.id, "Instructor registered");
    Ok(Json(AuthResponse {
        id: instructor.id,
        name: instructor.name,
        email: instructor.email,
        token,
    }))
}

#[utoipa::path(
    post,
    path = "/api/instructors/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid password", body = ErrorResponse),
        (status = 404, description = "No instructor with this email", body = ErrorResponse)
    ),
    tag = "Instructors"
)]
#[instrument(skip(state, dto))]
pub async fn login_instructor(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<Json<AuthResponse>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let account = InstructorService::find_by_email(&state.db, &dto.email)
        .await?
        .ok_or_else(|| AppError::not_found("No instructor with this email"))?;

    if !verify_password(&dto.password, &account.password)? {
        return Err(AppError::unauthorized("Invalid password"));
    }

    let token = issue_token(
        account.id,
        &account.email,
        Role::Instructor,
        &state.jwt_config,
    )?;

    tracing::info!(instructor_id = account.id, "Instructor logged in");
    Ok(Json(AuthResponse {
        id: account.id,
        name: account.name,
        email: account.email,
        token,
    }))
}

#[utoipa::path(
    get,
    path = "/api/instructors/{id}",
    params(("id" = i64, Path, description = "Instructor ID")),
    responses(
        (status = 200, description = "Instructor profile", body = Instructor),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Instructor not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Instructors"
)]
#[instrument(skip(state))]
pub async fn get_instructor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Instructor>, AppError> {
    let instructor = InstructorService::get_by_id(&state.db, id).await?;
    Ok(Json(instructor))
}

#[utoipa::path(
    put,
    path = "/api/instructors/{id}",
    params(("id" = i64, Path, description = "Instructor ID")),
    request_body = UpdateInstructorDto,
    responses(
        (status = 200, description = "Profile updated", body = Instructor),
        (status = 400, description = "Current password is incorrect", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Not your profile", body = ErrorResponse),
        (status = 404, description = "Instructor not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Instructors"
)]
#[instrument(skip(state, dto))]
pub async fn update_instructor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateInstructorDto>,
) -> Result<Json<Instructor>, AppError> {
    if !auth_user.is_subject(id) {
        return Err(AppError::forbidden("You can only update your own profile"));
    }

    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let instructor = InstructorService::update(&state.db, id, dto).await?;
    Ok(Json(instructor))
}

#[utoipa::path(
    get,
    path = "/api/instructors/{id}/courses",
    params(("id" = i64, Path, description = "Instructor ID")),
    responses(
        (status = 200, description = "Courses taught by the instructor", body = [Course]),
        (status = 400, description = "Instructor id must be provided", body = ErrorResponse)
    ),
    tag = "Instructors"
)]
#[instrument(skip(state))]
pub async fn courses_of_instructor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Course>>, AppError> {
    if id <= 0 {
        return Err(AppError::bad_request("Instructor id must be provided"));
    }

    let courses = CourseService::by_instructor(&state.db, id).await?;
    Ok(Json(courses))
}
