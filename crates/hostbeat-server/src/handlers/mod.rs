//! HTTP handlers, one module per endpoint.
//!
//! Every defined route answers 200 for every reachable input; `ApiError`
//! exists for the one path that can still fail (the compute task dying
//! underneath us).

pub mod compute;
pub mod health;
pub mod info;
pub mod metrics;
pub mod system;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use hostbeat_core::error::ClientCode;
use hostbeat_core::HostbeatError;

/// Adapter from the shared error type to an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub HostbeatError);

impl From<HostbeatError> for ApiError {
    fn from(err: HostbeatError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "error": { "code": code.as_str(), "msg": self.0.to_string() }
        }));
        (status, body).into_response()
    }
}
