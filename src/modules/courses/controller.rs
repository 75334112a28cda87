use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use validator::Validate;

use lectern_core::AppError;
use lectern_models::lectures::Lecture;
use lectern_models::reviews::Review;
use lectern_models::students::Student;

use crate::docs::ErrorResponse;
use crate::middleware::auth::AuthUser;
use crate::modules::courses::model::{Course, CreateCourseDto, SearchParams, UpdateCourseDto};
use crate::modules::courses::service::CourseService;
use crate::modules::enrollments::service::EnrollmentService;
use crate::modules::lectures::service::LectureService;
use crate::modules::reviews::service::ReviewService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses in the catalog", body = [Course])
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list_all(&state.db).await?;
    Ok(Json(courses))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 200, description = "Course created", body = Course),
        (status = 400, description = "Unknown instructor", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Instructor role required", body = ErrorResponse),
        (status = 409, description = "Course name already taken", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    Json(dto): Json<CreateCourseDto>,
) -> Result<Json<Course>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let course = CourseService::create(&state.db, &dto).await?;

    tracing::info!(course_id = course.id, "Course created");
    Ok(Json(course))
}

#[utoipa::path(
    get,
    path = "/api/courses/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Courses matching the keyword", body = [Course]),
        (status = 400, description = "Empty keyword", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn search_courses(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Course>>, AppError> {
    if params.keyword.trim().is_empty() {
        return Err(AppError::bad_request("Search keyword must not be empty"));
    }

    let courses = CourseService::search(&state.db, &params.keyword).await?;
    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/courses/recommended",
    responses(
        (status = 200, description = "Courses the calling student is not enrolled in", body = [Course]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Student role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn recommended_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses =
        CourseService::recommended_for_student(&state.db, auth_user.subject_id()).await?;
    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course details", body = Course),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::get_by_id(&state.db, id).await?;
    Ok(Json(course))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Instructor role required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 409, description = "Course name already taken", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateCourseDto>,
) -> Result<Json<Course>, AppError> {
    if id <= 0 {
        return Err(AppError::bad_request("Course id must be provided"));
    }

    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let course = CourseService::update(&state.db, id, &dto).await?;
    Ok(Json(course))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Instructor role required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    CourseService::delete(&state.db, id).await?;

    tracing::info!(course_id = id, "Course deleted");
    Ok(Json(serde_json::json!({ "deleted": true })))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}/lectures",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Lectures of the course", body = [Lecture]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn lectures_of_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Lecture>>, AppError> {
    if id <= 0 {
        return Err(AppError::bad_request("Course id must be provided"));
    }

    let lectures = LectureService::by_course(&state.db, id).await?;
    Ok(Json(lectures))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}/reviews",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Reviews of the course", body = [Review]),
        (status = 400, description = "Course id must be provided", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn reviews_of_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Review>>, AppError> {
    if id <= 0 {
        return Err(AppError::bad_request("Course id must be provided"));
    }

    let reviews = ReviewService::by_course(&state.db, id).await?;
    Ok(Json(reviews))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}/students",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Students enrolled in the course", body = [Student]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Instructor role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn students_of_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Student>>, AppError> {
    if id <= 0 {
        return Err(AppError::bad_request("Course id must be provided"));
    }

    let students = EnrollmentService::students_by_course(&state.db, id).await?;
    Ok(Json(students))
}
