//! Request DTOs for the search service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::search::{SearchRequest, DEFAULT_MAX_RESULTS};

/// Request body for POST /search
///
/// # Fields
/// - `query`: Search text, passed through verbatim
/// - `search_depth`: `basic` or `advanced` (default); other values fall back to `advanced`
/// - `max_results`: Result count (default 5)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchBody {
    pub query: String,
    #[serde(default = "default_search_depth")]
    pub search_depth: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_search_depth() -> String {
    "advanced".to_string()
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

impl SearchBody {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.query.is_empty() {
            return Some("Query cannot be empty".to_string());
        }
        None
    }

    pub fn to_request(&self) -> SearchRequest {
        SearchRequest::new(self.query.clone(), &self.search_depth, self.max_results)
    }
}
