use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use validator::Validate;

use lectern_core::AppError;

use crate::docs::ErrorResponse;
use crate::modules::lectures::model::{CreateLectureDto, Lecture, UpdateLectureDto};
use crate::modules::lectures::service::LectureService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/lectures",
    request_body = CreateLectureDto,
    responses(
        (status = 200, description = "Lecture added", body = Lecture),
        (status = 400, description = "All fields must be filled in", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Instructor role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state, dto))]
pub async fn add_lecture(
    State(state): State<AppState>,
    Json(dto): Json<CreateLectureDto>,
) -> Result<Json<Lecture>, AppError> {
    dto.validate()
        .map_err(|_| AppError::bad_request("All fields must be filled in"))?;

    let lecture = LectureService::add_to_course(&state.db, &dto).await?;

    tracing::info!(
        lecture_id = lecture.id,
        course_id = lecture.course_id,
        "Lecture added"
    );
    Ok(Json(lecture))
}

#[utoipa::path(
    get,
    path = "/api/lectures/{id}",
    params(("id" = i64, Path, description = "Lecture ID")),
    responses(
        (status = 200, description = "Lecture content", body = Lecture),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Lecture not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state))]
pub async fn get_lecture_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Lecture>, AppError> {
    if id <= 0 {
        return Err(AppError::bad_request("Lecture id must be provided"));
    }

    let lecture = LectureService::get_content(&state.db, id).await?;
    Ok(Json(lecture))
}

#[utoipa::path(
    put,
    path = "/api/lectures/{id}",
    params(("id" = i64, Path, description = "Lecture ID")),
    request_body = UpdateLectureDto,
    responses(
        (status = 200, description = "Lecture updated", body = Lecture),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Instructor role required", body = ErrorResponse),
        (status = 404, description = "Lecture not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state, dto))]
pub async fn update_lecture(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateLectureDto>,
) -> Result<Json<Lecture>, AppError> {
    if id <= 0 {
        return Err(AppError::bad_request("Lecture id must be provided"));
    }

    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let lecture = LectureService::update(&state.db, id, &dto).await?;
    Ok(Json(lecture))
}

#[utoipa::path(
    delete,
    path = "/api/lectures/{id}",
    params(("id" = i64, Path, description = "Lecture ID")),
    responses(
        (status = 200, description = "Lecture deleted"),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Instructor role required", body = ErrorResponse),
        (status = 404, description = "Lecture not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state))]
pub async fn delete_lecture(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if id <= 0 {
        return Err(AppError::bad_request("Lecture id must be provided"));
    }

    LectureService::delete(&state.db, id).await?;

    tracing::info!(lecture_id = id, "Lecture deleted");
    Ok(Json(serde_json::json!({ "deleted": true })))
}
