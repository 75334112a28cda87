use axum::{Json, Router, middleware, routing::get, routing::post};
use serde_json::json;

use lectern::middleware::access::{AccessControl, enforce_access};
use lectern::middleware::auth::AuthUser;
use lectern::router::access_policy;
use lectern_auth::{Role, issue_token};
use lectern_config::JwtConfig;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry_hours: 1,
    }
}

/// A bearer token for the given subject, signed with the test secret.
pub fn test_token(subject_id: i64, email: &str, role: Role) -> String {
    issue_token(subject_id, email, role, &test_jwt_config()).unwrap()
}

/// A token signed with a different secret than the gate verifies with.
pub fn foreign_token(subject_id: i64, email: &str, role: Role) -> String {
    let foreign_config = JwtConfig {
        secret: "a_secret_the_server_never_saw".to_string(),
        token_expiry_hours: 1,
    };
    issue_token(subject_id, email, role, &foreign_config).unwrap()
}

/// An already-expired token signed with the test secret.
pub fn expired_token(subject_id: i64, email: &str, role: Role) -> String {
    let expired_config = JwtConfig {
        secret: test_jwt_config().secret,
        token_expiry_hours: -1,
    };
    issue_token(subject_id, email, role, &expired_config).unwrap()
}

async fn ok_handler() -> &'static str {
    "ok"
}

async fn whoami(auth_user: AuthUser) -> Json<serde_json::Value> {
    Json(json!({
        "subject_id": auth_user.subject_id(),
        "email": auth_user.email(),
        "role": auth_user.0.role,
    }))
}

/// A router carrying a representative slice of the real route tree, guarded
/// by the production access policy, with stub handlers so no database is
/// needed.
pub fn test_router() -> Router {
    let access = AccessControl::new(access_policy(), test_jwt_config());

    Router::new()
        // Public routes
        .route("/api/students/login", post(ok_handler))
        // Public list, instructor-restricted create
        .route("/api/courses", get(ok_handler).post(ok_handler))
        // Student-restricted
        .route("/api/enrollments", post(ok_handler))
        // Unlisted: falls through to the authenticated-only default
        .route("/api/students/{id}", get(whoami))
        .route("/api/internal/reindex", post(ok_handler))
        .layer(middleware::from_fn_with_state(access, enforce_access))
}
