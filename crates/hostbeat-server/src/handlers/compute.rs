//! `GET /compute` (synthetic CPU load).

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use hostbeat_core::parse::parse_or_default;
use hostbeat_core::protocol::ComputeResponse;
use hostbeat_core::workload::{self, DEFAULT_ITERATIONS};
use hostbeat_core::HostbeatError;

use crate::app_state::AppState;
use crate::handlers::ApiError;

/// Query parameters for `/compute`.
///
/// `iterations` is carried as a raw string so non-numeric input coerces to
/// the default instead of failing extraction with a 400.
#[derive(Debug, Default, Deserialize)]
pub struct ComputeQuery {
    pub iterations: Option<String>,
}

/// Effective iteration count for a request.
fn effective_iterations(q: &ComputeQuery) -> i64 {
    parse_or_default("iterations", q.iterations.as_deref(), DEFAULT_ITERATIONS)
}

pub async fn compute(
    State(app): State<AppState>,
    Query(q): Query<ComputeQuery>,
) -> Result<Json<ComputeResponse>, ApiError> {
    app.metrics().http_requests.inc(&[("route", "/compute")]);

    let iterations = effective_iterations(&q);

    // The count is unbounded; run the loop on the blocking pool so a long
    // request occupies a blocking thread instead of stalling `/health`.
    app.metrics().compute_in_flight.inc(&[]);
    let run = tokio::task::spawn_blocking(move || workload::timed_sqrt_sum(iterations)).await;
    app.metrics().compute_in_flight.dec(&[]);

    let run = run.map_err(|e| HostbeatError::Internal(format!("compute task failed: {e}")))?;

    let duration_ms = run.elapsed.as_millis() as u64;
    app.metrics().compute_duration.observe(&[], run.elapsed);
    tracing::debug!(iterations, duration_ms, "compute finished");

    Ok(Json(ComputeResponse {
        app: app.cfg().app_name.clone(),
        server: app.probe().hostname(),
        computation: workload::COMPUTATION,
        iterations,
        result: run.result,
        duration_ms,
    }))
}
