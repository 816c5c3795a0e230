//! `GET /metrics` (Prometheus text exposition).

use axum::extract::State;

use crate::app_state::AppState;

pub async fn metrics(State(app): State<AppState>) -> String {
    app.metrics().http_requests.inc(&[("route", "/metrics")]);

    let uptime = app.uptime_seconds() as u64;
    app.metrics().render(&[("hostbeat_uptime_seconds", uptime)])
}
