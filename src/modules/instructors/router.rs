use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::instructors::controller::{
    courses_of_instructor, get_instructor, login_instructor, register_instructor,
    update_instructor,
};
use crate::state::AppState;

pub fn init_instructors_router() -> Router<AppState> {
    Router::new()
        .route("/api/instructors/register", post(register_instructor))
        .route("/api/instructors/login", post(login_instructor))
        .route(
            "/api/instructors/{id}",
            get(get_instructor).put(update_instructor),
        )
        .route("/api/instructors/{id}/courses", get(courses_of_instructor))
}
