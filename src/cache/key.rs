//! Cache Key Module
//!
//! Derives the store key for a search request.

use std::fmt;

use crate::search::{SearchDepth, SearchRequest};

/// Literal namespace token that prefixes every search cache key
pub const CACHE_NAMESPACE: &str = "tavily";

// == Cache Key ==
/// Deterministic key of the form `tavily:<depth>:<max_results>:<query>`.
///
/// The query is embedded verbatim: no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(depth: SearchDepth, max_results: u32, query: &str) -> Self {
        Self(format!(
            "{}:{}:{}:{}",
            CACHE_NAMESPACE,
            depth.as_str(),
            max_results,
            query
        ))
    }

    /// Key for an already-normalized request.
    pub fn for_request(request: &SearchRequest) -> Self {
        Self::new(request.depth(), request.max_results(), request.query())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
