//! Shared application state.
//!
//! One instance is built at startup and cloned into every handler. Nothing in
//! here is mutable across requests except the metrics registry, which is
//! internally synchronized.

use std::sync::Arc;
use std::time::Instant;

use hostbeat_core::host::HostProbe;

use crate::config::ServerConfig;
use crate::obs::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    started: Instant,
    probe: Arc<dyn HostProbe>,
    metrics: Arc<ServiceMetrics>,
}

impl AppState {
    pub fn new(cfg: ServerConfig, probe: Arc<dyn HostProbe>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                started: Instant::now(),
                probe,
                metrics: Arc::new(ServiceMetrics::default()),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    /// Process uptime in seconds (wall clock since state construction).
    pub fn uptime_seconds(&self) -> f64 {
        self.inner.started.elapsed().as_secs_f64()
    }

    pub fn probe(&self) -> Arc<dyn HostProbe> {
        Arc::clone(&self.inner.probe)
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }
}
