use axum::{Json, extract::State};
use tracing::instrument;
use validator::Validate;

use lectern_core::AppError;

use crate::docs::ErrorResponse;
use crate::modules::reviews::model::{CreateReviewDto, Review};
use crate::modules::reviews::service::ReviewService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewDto,
    responses(
        (status = 200, description = "Review added", body = Review),
        (status = 400, description = "Invalid review data", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Student role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
#[instrument(skip(state, dto))]
pub async fn add_review(
    State(state): State<AppState>,
    Json(dto): Json<CreateReviewDto>,
) -> Result<Json<Review>, AppError> {
    dto.validate().map_err(|_| {
        AppError::bad_request(
            "Student id, course id, and a rating between 1 and 5 must be provided",
        )
    })?;

    let review = ReviewService::add(&state.db, &dto).await?;

    tracing::info!(
        review_id = review.id,
        course_id = review.course_id,
        "Review added"
    );
    Ok(Json(review))
}
