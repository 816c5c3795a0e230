//! `GET /api/data` (host introspection).

use axum::extract::State;
use axum::Json;

use hostbeat_core::protocol::{SystemData, SystemDataResponse};

use crate::app_state::AppState;

pub async fn system_data(State(app): State<AppState>) -> Json<SystemDataResponse> {
    app.metrics().http_requests.inc(&[("route", "/api/data")]);

    let probe = app.probe();
    let mem = probe.memory();

    Json(SystemDataResponse {
        app: app.cfg().app_name.clone(),
        server: probe.hostname(),
        data: SystemData {
            cpu_count: probe.cpu_count(),
            platform: probe.platform(),
            memory_total: mem.total_bytes,
            memory_free: mem.free_bytes,
        },
    })
}
