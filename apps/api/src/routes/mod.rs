pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/evaluate", post(handlers::handle_evaluate))
        .route("/api/v1/optimize", post(handlers::handle_optimize))
        .route("/api/v1/compare", post(handlers::handle_compare))
        .with_state(state)
}
