//! Cached Search - a cache-aside layer in front of a credit-limited web search API
//!
//! Pipeline stages call [`CachedSearchTool::search`]; hits are served from
//! Redis (or an in-memory store) without touching the provider, misses are
//! fetched once and written back with a TTL. The cache is optional: when it
//! is unreachable every call goes to the provider.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheProvider, CacheStore};
pub use config::Config;
pub use error::{Result, SearchError};
pub use search::{CachedSearchTool, SearchRequest, SearchResult, TavilyClient};
pub use tasks::spawn_cleanup_task;
