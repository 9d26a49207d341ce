//! API Handlers
//!
//! HTTP request handlers for each search service endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::cache::CacheStore;
use crate::error::{Result, SearchError};
use crate::models::{HealthResponse, SearchBody, StatsResponse};
use crate::search::{CachedSearchTool, SearchResult, ToolDefinition};

/// Application state shared across all handlers.
///
/// The tool is shared behind an `Arc`; it needs no lock of its own.
#[derive(Clone)]
pub struct AppState {
    pub tool: Arc<CachedSearchTool>,
}

impl AppState {
    pub fn new(tool: CachedSearchTool) -> Self {
        Self {
            tool: Arc::new(tool),
        }
    }

    fn store(&self) -> &Arc<dyn CacheStore> {
        self.tool.store()
    }
}

/// Handler for POST /search
///
/// Runs a cached search. A provider failure is answered with 502 and the
/// same `SearchResult` body, `status` set to `error`.
pub async fn search_handler(
    State(state): State<AppState>,
    Json(body): Json<SearchBody>,
) -> Result<(StatusCode, Json<SearchResult>)> {
    if let Some(error_msg) = body.validate() {
        return Err(SearchError::InvalidRequest(error_msg));
    }

    let result = state.tool.run(&body.to_request()).await;
    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    Ok((status, Json(result)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.tool.stats()))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store();
    Json(HealthResponse::healthy(
        store.backend_name(),
        store.is_available(),
    ))
}

/// Handler for GET /tool
pub async fn tool_handler(State(state): State<AppState>) -> Json<ToolDefinition> {
    Json(state.tool.definition())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{MemoryStore, NullStore};
    use crate::search::{ResponseType, SearchDepth, SearchProvider};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct StaticProvider;

    #[async_trait]
    impl SearchProvider for StaticProvider {
        async fn search(&self, query: &str, _depth: SearchDepth, _max: u32) -> Result<Value> {
            Ok(json!({ "query": query, "results": [] }))
        }
    }

    fn memory_state() -> AppState {
        AppState::new(CachedSearchTool::new(
            Arc::new(StaticProvider),
            Arc::new(MemoryStore::new()),
            Some(300),
        ))
    }

    fn body(query: &str) -> SearchBody {
        SearchBody {
            query: query.to_string(),
            search_depth: "advanced".to_string(),
            max_results: 5,
        }
    }

    #[tokio::test]
    async fn test_search_handler_miss_then_hit() {
        let state = memory_state();

        let (status, Json(first)) = search_handler(State(state.clone()), Json(body("q")))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first.response_type, Some(ResponseType::Generated));

        let (_, Json(second)) = search_handler(State(state), Json(body("q")))
            .await
            .unwrap();
        assert_eq!(second.response_type, Some(ResponseType::Cached));
    }

    #[tokio::test]
    async fn test_search_handler_empty_query() {
        let result = search_handler(State(memory_state()), Json(body(""))).await;
        assert!(matches!(result, Err(SearchError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(memory_state())).await;
        assert_eq!(response.stats.hits, 0);
        assert_eq!(response.hit_rate, 0.0);
    }

    #[tokio::test]
    async fn test_health_handler_reports_degraded_cache() {
        let state = AppState::new(CachedSearchTool::new(
            Arc::new(StaticProvider),
            Arc::new(NullStore),
            None,
        ));

        let response = health_handler(State(state)).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.cache_backend, "none");
        assert!(!response.cache_available);
    }
}
