//! Shared error type across hostbeat crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HostbeatError>;

/// Unified error type used by core and server.
///
/// The service surface is deliberately permissive (bad input coerces to
/// defaults instead of rejecting), so `BadRequest` is reserved for future
/// strict endpoints; today only `Internal` is reachable over HTTP.
#[derive(Debug, Error)]
pub enum HostbeatError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl HostbeatError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HostbeatError::BadRequest(_) => ClientCode::BadRequest,
            HostbeatError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_codes_are_stable() {
        assert_eq!(
            HostbeatError::BadRequest("x".into()).client_code().as_str(),
            "BAD_REQUEST"
        );
        assert_eq!(
            HostbeatError::Internal("x".into()).client_code().as_str(),
            "INTERNAL"
        );
    }
}
