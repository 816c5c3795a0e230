//! `GET /health` (liveness).
//!
//! The service has no dependencies to check, so the status is fixed.

use axum::extract::State;
use axum::Json;

use hostbeat_core::protocol::{HealthResponse, HealthStatus};

use crate::app_state::AppState;

pub async fn health(State(app): State<AppState>) -> Json<HealthResponse> {
    app.metrics().http_requests.inc(&[("route", "/health")]);

    Json(HealthResponse {
        status: HealthStatus::Healthy,
        app: app.cfg().app_name.clone(),
        uptime: app.uptime_seconds(),
    })
}
