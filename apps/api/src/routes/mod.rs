pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::ats::handlers::handle_score;
use crate::extraction::handlers::handle_extract;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/score", post(handle_score))
        .route("/extract", post(handle_extract))
        .layer(DefaultBodyLimit::max(body_limit))
        // Browser client is served from a different origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
