//! Axum router wiring.
//!
//! Unrouted paths fall through to axum's default 404.

use axum::{routing::get, Router};

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::info::root))
        .route("/health", get(handlers::health::health))
        .route("/api/data", get(handlers::system::system_data))
        .route("/compute", get(handlers::compute::compute))
        .route("/metrics", get(handlers::metrics::metrics))
        .with_state(state)
}
