//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Upstream Error Enum ==
/// Failure reported by a producer while computing or fetching a value.
///
/// The cache never interprets these; they pass through `resolve` unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// Order is below the first element of the sequence
    #[error("Order {0} is outside the supported range")]
    OrderOutOfRange(u64),

    /// Value does not fit in a 64-bit unsigned integer
    #[error("Value for order {0} overflows a 64-bit integer")]
    Overflow(u64),

    /// Connection-level failure talking to the upstream service
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// Upstream did not answer within the configured timeout
    #[error("Upstream request timed out")]
    Timeout,

    /// Upstream answered with a non-success status code
    #[error("Upstream returned status {0}")]
    Status(u16),

    /// Upstream body could not be understood
    #[error("Upstream returned an invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if err.is_decode() {
            UpstreamError::InvalidResponse(err.to_string())
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

// == Cache Error Enum ==
/// Unified error type for the cache server.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Invalid configuration, fatal at startup
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Producer failed to supply a value
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Configuration(_) | CacheError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match self {
            CacheError::InvalidRequest(msg) => msg,
            other => other.to_string(),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_maps_to_bad_request() {
        let response = CacheError::InvalidRequest("bad order".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_maps_to_internal_error() {
        let response = CacheError::from(UpstreamError::Status(503)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_message_is_transparent() {
        let err = CacheError::from(UpstreamError::Overflow(94));
        assert_eq!(
            err.to_string(),
            "Value for order 94 overflows a 64-bit integer"
        );
    }
}
