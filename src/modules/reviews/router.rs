use axum::{Router, routing::post};

use crate::modules::reviews::controller::add_review;
use crate::state::AppState;

pub fn init_reviews_router() -> Router<AppState> {
    Router::new().route("/api/reviews", post(add_review))
}
