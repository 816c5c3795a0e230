//! Observability for the service.

pub mod metrics;

pub use metrics::ServiceMetrics;
