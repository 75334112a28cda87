use axum::{Router, routing::get};

use crate::modules::courses::controller::{
    create_course, delete_course, get_course, lectures_of_course, list_courses,
    recommended_courses, reviews_of_course, search_courses, students_of_course, update_course,
};
use crate::state::AppState;

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/api/courses", get(list_courses).post(create_course))
        .route("/api/courses/search", get(search_courses))
        .route("/api/courses/recommended", get(recommended_courses))
        .route(
            "/api/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route("/api/courses/{id}/lectures", get(lectures_of_course))
        .route("/api/courses/{id}/reviews", get(reviews_of_course))
        .route("/api/courses/{id}/students", get(students_of_course))
}
