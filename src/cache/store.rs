//! Cache Store Module
//!
//! The key-value-with-TTL contract the search tool caches through.

use async_trait::async_trait;

use crate::error::{Result, SearchError};

// == Cache Store ==
/// A shared, concurrently usable store with per-entry expiry.
///
/// Implementations own their concurrency: callers share one handle across
/// tasks without extra locking.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Short name for logs and health output.
    fn backend_name(&self) -> &'static str;

    /// Capability check made before every store operation. A `false` here
    /// means the store is disabled or unreachable and must be skipped.
    fn is_available(&self) -> bool;

    /// Returns the stored payload, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous entry.
    async fn set_with_ttl(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()>;
}

// == Null Store ==
/// Store used when caching is switched off. Always unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

#[async_trait]
impl CacheStore for NullStore {
    fn backend_name(&self) -> &'static str {
        "none"
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(SearchError::CacheUnavailable)
    }

    async fn set_with_ttl(&self, _key: &str, _value: &str, _ttl_secs: u64) -> Result<()> {
        Err(SearchError::CacheUnavailable)
    }
}
