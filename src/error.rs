//! Error types for the cached search service
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Search Error Enum ==
/// Unified error type for the search provider, the cache store and the HTTP surface.
#[derive(Error, Debug)]
pub enum SearchError {
    /// A required credential is absent; fatal at startup
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Provider answered with a non-success status
    #[error("Provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// Network failure talking to the provider
    #[error("Transport error: {0}")]
    Transport(String),

    /// Provider call exceeded the configured bound
    #[error("Provider request timed out after {0:?}")]
    Timeout(Duration),

    /// Cache store is disabled or unreachable
    #[error("Cache store unavailable")]
    CacheUnavailable,

    /// Store-specific failure on a reachable cache
    #[error("Cache error: {0}")]
    Cache(String),

    /// Payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<redis::RedisError> for SearchError {
    fn from(err: redis::RedisError) -> Self {
        SearchError::Cache(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Serialization(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = match &self {
            SearchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            SearchError::CacheUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            SearchError::Provider { .. } | SearchError::Transport(_) => StatusCode::BAD_GATEWAY,
            SearchError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            SearchError::MissingCredential(_)
            | SearchError::Cache(_)
            | SearchError::Serialization(_)
            | SearchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the search service.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::Provider {
            status: 432,
            message: "usage limit exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "Provider returned 432: usage limit exceeded");

        let err = SearchError::Timeout(Duration::from_secs(30));
        assert!(err.to_string().contains("30s"));
    }

    #[test]
    fn test_error_status_codes() {
        let resp = SearchError::InvalidRequest("empty".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = SearchError::Transport("refused".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let resp = SearchError::CacheUnavailable.into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
