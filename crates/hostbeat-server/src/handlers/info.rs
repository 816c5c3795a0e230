//! `GET /` (instance info).

use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};

use hostbeat_core::protocol::InfoResponse;

use crate::app_state::AppState;

pub async fn root(State(app): State<AppState>) -> Json<InfoResponse> {
    app.metrics().http_requests.inc(&[("route", "/")]);

    Json(InfoResponse {
        message: format!("Hello from {}", app.cfg().app_name),
        hostname: app.probe().hostname(),
        uptime: app.uptime_seconds(),
        port: app.cfg().port,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
