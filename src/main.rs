//! Cached Search - HTTP sidecar exposing the cache-aside search tool
//!
//! Pipeline stages running in other processes share one cache and one
//! provider credential through this service.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cached_search::api::create_router;
use cached_search::{
    spawn_cleanup_task, AppState, CacheProvider, CachedSearchTool, Config, TavilyClient,
};

/// Main entry point for the cached search service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration (`.env` + environment); a missing API key aborts here
/// 3. Connect the cache store, degrading to no cache if it is unreachable
/// 4. Start the sweep task when the in-memory store is selected
/// 5. Serve the HTTP API until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cached_search=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cached Search Service");

    let config = Config::load().context("failed to load configuration")?;
    info!(
        "Configuration loaded: backend={:?}, ttl={:?}s, timeout={}s, port={}",
        config.cache_backend, config.ttl_time, config.search_timeout, config.server_port
    );

    let provider = TavilyClient::from_config(&config).context("failed to build search client")?;

    let cache = CacheProvider::connect(&config).await;
    let cleanup_handle = cache
        .memory()
        .map(|store| spawn_cleanup_task(store, config.cleanup_interval));

    let tool = CachedSearchTool::new(Arc::new(provider), cache.store(), config.ttl_time);
    let app = create_router(AppState::new(tool));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then stops the sweep task.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
