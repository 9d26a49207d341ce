//! API Module
//!
//! HTTP handlers and routing for the search service, so out-of-process
//! pipeline stages can share one cache-aside tool.
//!
//! # Endpoints
//! - `POST /search` - Cached search
//! - `GET /stats` - Search statistics
//! - `GET /health` - Health check endpoint
//! - `GET /tool` - Tool definition

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
