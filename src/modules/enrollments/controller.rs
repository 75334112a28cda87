use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use validator::Validate;

use lectern_core::AppError;

use crate::docs::ErrorResponse;
use crate::modules::enrollments::model::EnrollmentDto;
use crate::modules::enrollments::service::EnrollmentService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/enrollments",
    request_body = EnrollmentDto,
    responses(
        (status = 200, description = "Student enrolled"),
        (status = 400, description = "Missing or unknown student/course", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Student role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn enroll_student(
    State(state): State<AppState>,
    Json(dto): Json<EnrollmentDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    dto.validate()
        .map_err(|_| AppError::bad_request("Student id and course id must be provided"))?;

    EnrollmentService::enroll(&state.db, dto.student_id, dto.course_id).await?;

    tracing::info!(
        student_id = dto.student_id,
        course_id = dto.course_id,
        "Student enrolled"
    );
    Ok(Json(serde_json::json!({ "enrolled": true })))
}

#[utoipa::path(
    delete,
    path = "/api/enrollments/{student_id}/{course_id}",
    params(
        ("student_id" = i64, Path, description = "Student ID"),
        ("course_id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Student unenrolled"),
        (status = 400, description = "Missing student/course id", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Student role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn unenroll_student(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(i64, i64)>,
) -> Result<Json<serde_json::Value>, AppError> {
    if student_id <= 0 || course_id <= 0 {
        return Err(AppError::bad_request(
            "Student id and course id must be provided",
        ));
    }

    EnrollmentService::unenroll(&state.db, student_id, course_id).await?;

    tracing::info!(student_id, course_id, "Student unenrolled");
    Ok(Json(serde_json::json!({ "unenrolled": true })))
}
