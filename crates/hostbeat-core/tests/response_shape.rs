//! Wire-shape tests for the response contracts.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use hostbeat_core::protocol::{
    ComputeResponse, HealthResponse, HealthStatus, InfoResponse, SystemData, SystemDataResponse,
};
use hostbeat_core::workload;
use serde_json::json;

#[test]
fn info_response_shape() {
    let body = InfoResponse {
        message: "Hello from App1".into(),
        hostname: "node-a".into(),
        uptime: 12.5,
        port: 3001,
        timestamp: "2026-08-07T12:00:00.000Z".into(),
    };

    let v = serde_json::to_value(&body).unwrap();
    assert_eq!(
        v,
        json!({
            "message": "Hello from App1",
            "hostname": "node-a",
            "uptime": 12.5,
            "port": 3001,
            "timestamp": "2026-08-07T12:00:00.000Z",
        })
    );
}

#[test]
fn health_status_serializes_lowercase() {
    let body = HealthResponse {
        status: HealthStatus::Healthy,
        app: "App1".into(),
        uptime: 0.25,
    };

    let v = serde_json::to_value(&body).unwrap();
    assert_eq!(v["status"], "healthy");
    assert_eq!(v["app"], "App1");
}

#[test]
fn system_data_nests_under_data_key() {
    let body = SystemDataResponse {
        app: "App1".into(),
        server: "node-a".into(),
        data: SystemData {
            cpu_count: 4,
            platform: "linux".into(),
            memory_total: 1024,
            memory_free: 512,
        },
    };

    let v = serde_json::to_value(&body).unwrap();
    assert_eq!(v["data"]["cpu_count"], 4);
    assert_eq!(v["data"]["platform"], "linux");
    assert_eq!(v["data"]["memory_total"], 1024);
    assert_eq!(v["data"]["memory_free"], 512);
}

#[test]
fn compute_response_echoes_iterations() {
    let body = ComputeResponse {
        app: "App1".into(),
        server: "node-a".into(),
        computation: workload::COMPUTATION,
        iterations: 100_000,
        result: 21_065_725.0,
        duration_ms: 3,
    };

    let v = serde_json::to_value(&body).unwrap();
    assert_eq!(v["computation"], "sum of square roots");
    assert_eq!(v["iterations"], 100_000);
    assert!(v["result"].as_f64().unwrap().is_finite());
}
