//! Search Result Module
//!
//! The structured outcome handed back to pipeline stages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    Success,
    Error,
}

/// Where a successful payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Read from the store, no provider call
    Cached,
    /// Fetched from the provider in this invocation
    Generated,
}

// == Search Result ==
/// Outcome of one search.
///
/// `response` is the serialized provider payload, identical byte for byte
/// whether it was cached or generated. It is serialized as `null` on error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub status: SearchStatus,
    pub query: String,
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SearchResult {
    pub fn cached(query: impl Into<String>, payload: String) -> Self {
        Self::success(query, payload, ResponseType::Cached)
    }

    pub fn generated(query: impl Into<String>, payload: String) -> Self {
        Self::success(query, payload, ResponseType::Generated)
    }

    pub fn error(query: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status: SearchStatus::Error,
            query: query.into(),
            response: None,
            response_type: None,
            details: Some(details.into()),
        }
    }

    fn success(query: impl Into<String>, payload: String, response_type: ResponseType) -> Self {
        Self {
            status: SearchStatus::Success,
            query: query.into(),
            response: Some(payload),
            response_type: Some(response_type),
            details: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SearchStatus::Success
    }
}
