//! Cached Search Tool
//!
//! Cache-aside search for pipeline stages: read through the store, call the
//! provider on a miss, write the serialized payload back with the
//! configured TTL.
//!
//! Store failures are absorbed (the call falls through to the provider);
//! provider failures are returned as `status = error`. `search` never
//! panics and never returns `Err`.
//!
//! Concurrent misses on the same key are not coalesced: each one calls
//! the provider and writes back, last write wins.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use crate::cache::{CacheKey, CacheStore, SearchStats, StatsRecorder};
use crate::search::{SearchProvider, SearchRequest, SearchResult};

/// Name pipeline stages use to refer to the tool
pub const TOOL_NAME: &str = "Tavily Search with Cache";

const TOOL_DESCRIPTION: &str = "Performs a Tavily web search for a given query. \
Results are cached to avoid redundant API calls and conserve credits. \
Provides comprehensive search results.";

// == Tool Definition ==
/// Self-description a reasoning stage can hand to its model.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

// == Cached Search Tool ==
pub struct CachedSearchTool {
    provider: Arc<dyn SearchProvider>,
    store: Arc<dyn CacheStore>,
    /// Write-back TTL; `None` or zero means results are not cached
    ttl_secs: Option<u64>,
    stats: StatsRecorder,
}

impl CachedSearchTool {
    pub fn new(
        provider: Arc<dyn SearchProvider>,
        store: Arc<dyn CacheStore>,
        ttl_secs: Option<u64>,
    ) -> Self {
        if ttl_secs.unwrap_or(0) == 0 {
            warn!("No cache TTL configured; search results will not be written back");
        }

        Self {
            provider,
            store,
            ttl_secs,
            stats: StatsRecorder::new(),
        }
    }

    /// Searches with raw parameters, normalizing them first.
    pub async fn search(&self, query: &str, search_depth: &str, max_results: u32) -> SearchResult {
        let request = SearchRequest::new(query, search_depth, max_results);
        self.run(&request).await
    }

    /// Executes a normalized request.
    pub async fn run(&self, request: &SearchRequest) -> SearchResult {
        let query = request.query();
        if query.is_empty() {
            return SearchResult::error(query, "query must not be empty");
        }

        for warning in request.warnings() {
            warn!("{}", warning);
            self.stats.record_normalization();
        }

        info!("Executing cached search: '{}'", query);
        let key = CacheKey::for_request(request);

        if let Some(payload) = self.lookup(&key).await {
            info!("Cache HIT for '{}', returning cached response", key);
            self.stats.record_hit();
            return SearchResult::cached(query, payload);
        }
        self.stats.record_miss();

        info!("Cache MISS or store unavailable, calling search provider");
        self.stats.record_remote_call();
        let fetched = self
            .provider
            .search(query, request.depth(), request.max_results())
            .await
            .and_then(|response| serde_json::to_string(&response).map_err(Into::into));

        let payload = match fetched {
            Ok(payload) => payload,
            Err(e) => {
                error!("Search provider call failed for '{}': {}", query, e);
                self.stats.record_remote_error();
                return SearchResult::error(query, e.to_string());
            }
        };

        self.write_back(&key, &payload).await;
        SearchResult::generated(query, payload)
    }

    async fn lookup(&self, key: &CacheKey) -> Option<String> {
        if !self.store.is_available() {
            debug!("Cache store '{}' unavailable, skipping lookup", self.store.backend_name());
            return None;
        }

        match self.store.get(key.as_str()).await {
            Ok(Some(payload)) if !payload.is_empty() => Some(payload),
            Ok(_) => None,
            Err(e) => {
                warn!("Cache GET error: {}. Proceeding without cache.", e);
                None
            }
        }
    }

    async fn write_back(&self, key: &CacheKey, payload: &str) {
        let Some(ttl) = self.ttl_secs.filter(|ttl| *ttl > 0) else {
            debug!("No TTL configured, result for '{}' not cached", key);
            return;
        };
        if !self.store.is_available() {
            return;
        }

        match self.store.set_with_ttl(key.as_str(), payload, ttl).await {
            Ok(()) => {
                info!("Result stored in cache (TTL: {}s)", ttl);
                self.stats.record_writeback();
            }
            Err(e) => {
                warn!("Cache SET error: {}. Result not cached.", e);
                self.stats.record_writeback_failure();
            }
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats.snapshot()
    }

    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: TOOL_NAME.to_string(),
            description: TOOL_DESCRIPTION.to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query"
                    },
                    "search_depth": {
                        "type": "string",
                        "enum": ["basic", "advanced"],
                        "default": "advanced",
                        "description": "How thorough the search should be"
                    },
                    "max_results": {
                        "type": "integer",
                        "minimum": 1,
                        "default": 5,
                        "description": "Maximum number of results to return"
                    }
                },
                "required": ["query"]
            }),
        }
    }
}
