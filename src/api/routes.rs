//! API Routes
//!
//! Configures the Axum router with all search service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, search_handler, stats_handler, tool_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /search` - Cached search
/// - `GET /stats` - Hit/miss and provider counters
/// - `GET /health` - Health check, including cache availability
/// - `GET /tool` - Tool definition for reasoning stages
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", post(search_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/tool", get(tool_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
