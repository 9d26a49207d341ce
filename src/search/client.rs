//! Remote Search Client
//!
//! Single-attempt calls to the Tavily search API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Result, SearchError};
use crate::search::SearchDepth;

// == Search Provider ==
/// The authoritative search source behind the cache.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Runs one search. No retry; every failure is returned to the caller.
    async fn search(&self, query: &str, depth: SearchDepth, max_results: u32) -> Result<Value>;
}

#[derive(Debug, Serialize)]
struct TavilySearchBody<'a> {
    query: &'a str,
    search_depth: SearchDepth,
    max_results: u32,
}

// == Tavily Client ==
#[derive(Debug, Clone)]
pub struct TavilyClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl TavilyClient {
    /// Fails fast when the API key is empty.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SearchError::MissingCredential(
                "Tavily API key is empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .user_agent(format!("cached_search/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.tavily_api_key.clone(),
            config.tavily_api_url.clone(),
            Duration::from_secs(config.search_timeout),
        )
    }

    fn map_request_error(&self, err: reqwest::Error) -> SearchError {
        if err.is_timeout() {
            SearchError::Timeout(self.timeout)
        } else if err.is_decode() {
            SearchError::Serialization(err.to_string())
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(&self, query: &str, depth: SearchDepth, max_results: u32) -> Result<Value> {
        let url = format!("{}/search", self.base_url);
        let body = TavilySearchBody {
            query,
            search_depth: depth,
            max_results,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SearchError::Provider {
                status: status.as_u16(),
                message: error_detail(&text),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| self.map_request_error(e))
    }
}

/// Pulls the human-readable message out of a provider error body
/// (`{"detail":{"error":"..."}}`), falling back to the raw text.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.pointer("/detail/error")
                .or_else(|| json.get("detail"))
                .or_else(|| json.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
