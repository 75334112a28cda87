use axum::{
    Router,
    routing::{delete, post},
};

use crate::modules::enrollments::controller::{enroll_student, unenroll_student};
use crate::state::AppState;

pub fn init_enrollments_router() -> Router<AppState> {
    Router::new()
        .route("/api/enrollments", post(enroll_student))
        .route(
            "/api/enrollments/{student_id}/{course_id}",
            delete(unenroll_student),
        )
}
