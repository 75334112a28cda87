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
use crate::modules::enrollments::service::EnrollmentService;
use crate::modules::students::model::{RegisterStudentDto, Student, UpdateStudentProfileDto};
use crate::modules::students::service::StudentService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/students/register",
    request_body = RegisterStudentDto,
    responses(
        (status = 200, description = "Student registered successfully", body = AuthResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn register_student(
    State(state): State<AppState>,
    Json(dto): Json<RegisterStudentDto>,
) -> Result<Json<AuthResponse>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let student = StudentService::register(&state.db, &dto).await?;
    let token = issue_token(student.id, &student.email, Role::Student, &state.jwt_config)?;

    tracing::info!(student_id = student.id, "Student registered");
    Ok(Json(AuthResponse {
        id: student.id,
        name: student.name,
        email: student.email,
        token,
    }))
}

#[utoipa::path(
    post,
    path = "/api/students/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid password", body = ErrorResponse),
        (status = 404, description = "No student with this email", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn login_student(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<Json<AuthResponse>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let account = StudentService::find_by_email(&state.db, &dto.email)
        .await?
        .ok_or_else(|| AppError::not_found("No student with this email"))?;

    if !verify_password(&dto.password, &account.password)? {
        return Err(AppError::unauthorized("Invalid password"));
    }

    let token = issue_token(account.id, &account.email, Role::Student, &state.jwt_config)?;

    tracing::info!(student_id = account.id, "Student logged in");
    Ok(Json(AuthResponse {
        id: account.id,
        name: account.name,
        email: account.email,
        token,
    }))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student profile", body = Student),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_by_id(&state.db, id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    request_body = UpdateStudentProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = Student),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Not your profile", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_student_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateStudentProfileDto>,
) -> Result<Json<Student>, AppError> {
    if !auth_user.is_subject(id) {
        return Err(AppError::forbidden("You can only update your own profile"));
    }

    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let student = StudentService::update_profile(&state.db, id, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}/courses",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Courses the student is enrolled in", body = [Course]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Student role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn courses_of_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Course>>, AppError> {
    if id <= 0 {
        return Err(AppError::bad_request("Student id must be provided"));
    }

    let courses = EnrollmentService::courses_by_student(&state.db, id).await?;
    Ok(Json(courses))
}
