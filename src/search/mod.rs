//! Search Module
//!
//! Request normalization, the remote provider client and the cache-aside tool.

mod client;
mod request;
mod result;
mod tool;

pub use client::{SearchProvider, TavilyClient};
pub use request::{SearchDepth, SearchRequest, DEFAULT_MAX_RESULTS};
pub use result::{ResponseType, SearchResult, SearchStatus};
pub use tool::{CachedSearchTool, ToolDefinition, TOOL_NAME};
