pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::puzzle::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Puzzle API
        .route(
            "/api/v1/puzzles/generate",
            post(handlers::handle_generate),
        )
        .with_state(state)
}
