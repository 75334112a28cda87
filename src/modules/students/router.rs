use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::students::controller::{
    courses_of_student, get_student_profile, login_student, register_student,
    update_student_profile,
};
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/api/students/register", post(register_student))
        .route("/api/students/login", post(login_student))
        .route(
            "/api/students/{id}",
            get(get_student_profile).put(update_student_profile),
        )
        .route("/api/students/{id}/courses", get(courses_of_student))
}
