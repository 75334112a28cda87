use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use lectern_auth::{AccessRule, PolicyTable, Role};

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::access::enforce_access;
use crate::modules::courses::router::init_courses_router;
use crate::modules::enrollments::router::init_enrollments_router;
use crate::modules::instructors::router::init_instructors_router;
use crate::modules::lectures::router::init_lectures_router;
use crate::modules::reviews::router::init_reviews_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;

/// The access policy for every operation the API exposes.
///
/// Keys are `"<METHOD> <route-template>"` and must match the route
/// definitions below. Registration, login, and public catalog browsing are
/// open; mutating a catalog is instructor work; enrolling, reviewing, and
/// everything student-scoped requires the student role. Any route not
/// listed here (including future ones) requires a valid credential.
pub fn access_policy() -> PolicyTable {
    use AccessRule::{Public, RoleRestricted};

    PolicyTable::from_rules([
        // Registration and login
        ("POST /api/students/register", Public),
        ("POST /api/students/login", Public),
        ("POST /api/instructors/register", Public),
        ("POST /api/instructors/login", Public),
        // Public catalog browsing
        ("GET /api/courses", Public),
        ("GET /api/courses/search", Public),
        ("GET /api/courses/{id}", Public),
        ("GET /api/courses/{id}/reviews", Public),
        ("GET /api/instructors/{id}/courses", Public),
        // Instructor operations
        ("POST /api/courses", RoleRestricted(Role::Instructor)),
        ("PUT /api/courses/{id}", RoleRestricted(Role::Instructor)),
        ("DELETE /api/courses/{id}", RoleRestricted(Role::Instructor)),
        (
            "GET /api/courses/{id}/students",
            RoleRestricted(Role::Instructor),
        ),
        ("POST /api/lectures", RoleRestricted(Role::Instructor)),
        ("PUT /api/lectures/{id}", RoleRestricted(Role::Instructor)),
        (
            "DELETE /api/lectures/{id}",
            RoleRestricted(Role::Instructor),
        ),
        ("PUT /api/instructors/{id}", RoleRestricted(Role::Instructor)),
        // Student operations
        ("POST /api/enrollments", RoleRestricted(Role::Student)),
        (
            "DELETE /api/enrollments/{student_id}/{course_id}",
            RoleRestricted(Role::Student),
        ),
        ("GET /api/students/{id}/courses", RoleRestricted(Role::Student)),
        ("GET /api/courses/recommended", RoleRestricted(Role::Student)),
        ("POST /api/reviews", RoleRestricted(Role::Student)),
        ("PUT /api/students/{id}", RoleRestricted(Role::Student)),
        // Everything else (profile and lecture reads) falls through to the
        // table's authenticated-only default.
    ])
}

pub fn init_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(init_students_router())
        .merge(init_instructors_router())
        .merge(init_courses_router())
        .merge(init_enrollments_router())
        .merge(init_lectures_router())
        .merge(init_reviews_router())
        .route_layer(middleware::from_fn_with_state(
            state.access.clone(),
            enforce_access,
        ));

    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(api)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
        })
        .layer(middleware::from_fn(logging_middleware))
}
