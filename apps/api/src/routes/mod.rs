pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/match", post(handlers::handle_match))
        // Resume PDFs run larger than axum's 2MB default.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .with_state(state)
}
