//! JSON response bodies for the info service endpoints.
//!
//! Field names here are the service's wire API. Load balancers and test
//! suites key on them, so renaming a field is a breaking change.

use serde::Serialize;

/// Health status reported by `/health`.
///
/// The service checks no dependencies (none exist), so the only value is
/// `healthy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    /// Greeting carrying the instance label.
    pub message: String,
    pub hostname: String,
    /// Process uptime in seconds.
    pub uptime: f64,
    /// Port the server was configured to listen on.
    pub port: u16,
    /// Current time, ISO-8601 UTC with millisecond precision.
    pub timestamp: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub app: String,
    pub uptime: f64,
}

/// Host introspection block nested under `data` in `GET /api/data`.
#[derive(Debug, Clone, Serialize)]
pub struct SystemData {
    pub cpu_count: usize,
    pub platform: String,
    pub memory_total: u64,
    pub memory_free: u64,
}

/// Body of `GET /api/data`.
#[derive(Debug, Clone, Serialize)]
pub struct SystemDataResponse {
    pub app: String,
    pub server: String,
    pub data: SystemData,
}

/// Body of `GET /compute`.
#[derive(Debug, Clone, Serialize)]
pub struct ComputeResponse {
    pub app: String,
    pub server: String,
    /// Human-readable description of the workload.
    pub computation: &'static str,
    /// Effective iteration count after permissive parsing.
    pub iterations: i64,
    pub result: f64,
    pub duration_ms: u64,
}
