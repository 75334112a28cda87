use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::lectures::controller::{
    add_lecture, delete_lecture, get_lecture_content, update_lecture,
};
use crate::state::AppState;

pub fn init_lectures_router() -> Router<AppState> {
    Router::new()
        .route("/api/lectures", post(add_lecture))
        .route(
            "/api/lectures/{id}",
            get(get_lecture_content)
                .put(update_lecture)
                .delete(delete_lecture),
        )
}
