//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::error::{Result, SearchError};

/// Default provider endpoint
pub const DEFAULT_TAVILY_API_URL: &str = "https://api.tavily.com";

// == Cache Backend ==
/// Which store sits behind the search cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheBackend {
    /// Shared Redis instance
    #[default]
    Redis,
    /// Process-local map with TTL
    Memory,
    /// No caching at all
    None,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(CacheBackend::Redis),
            "memory" => Ok(CacheBackend::Memory),
            "none" | "off" | "disabled" => Ok(CacheBackend::None),
            other => Err(format!("unknown cache backend '{}'", other)),
        }
    }
}

// == Redis Settings ==
/// Connection parameters for the Redis cache store.
#[derive(Debug, Clone)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
    pub db: i64,
    pub password: Option<String>,
    /// Upper bound on the startup reachability probe, in seconds
    pub connect_timeout: u64,
    /// Upper bound on each GET/SETEX after startup, in milliseconds
    pub command_timeout_ms: u64,
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            db: 0,
            password: None,
            connect_timeout: 5,
            command_timeout_ms: 1000,
        }
    }
}

/// Service configuration parameters.
///
/// Everything except the provider API key has a sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search provider credential
    pub tavily_api_key: String,
    /// Search provider base URL
    pub tavily_api_url: String,
    /// Per-request timeout on the provider call, in seconds
    pub search_timeout: u64,
    /// Cache store selection
    pub cache_backend: CacheBackend,
    /// Redis location, used when `cache_backend` is `Redis`
    pub redis: RedisSettings,
    /// Entry TTL in seconds; `None` or zero disables write-back
    pub ttl_time: Option<u64>,
    /// In-memory store sweep interval in seconds
    pub cleanup_interval: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Loads `.env` (if present) and then reads the environment.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Creates a new Config from environment variables.
    ///
    /// # Environment Variables
    /// - `TAVILY_API_KEY` - Provider credential (required)
    /// - `TAVILY_API_URL` - Provider base URL (default: https://api.tavily.com)
    /// - `SEARCH_TIMEOUT_SECS` - Provider request timeout (default: 30)
    /// - `CACHE_BACKEND` - `redis`, `memory` or `none` (default: redis)
    /// - `REDIS_HOST` / `REDIS_PORT` / `REDIS_DB` / `REDIS_PASSWORD`
    /// - `REDIS_CONNECT_TIMEOUT_SECS` - Startup probe bound (default: 5)
    /// - `REDIS_COMMAND_TIMEOUT_MS` - Per-command bound after startup (default: 1000)
    /// - `TTL_TIME` - Cache entry TTL in seconds (default: unset, no write-back)
    /// - `CLEANUP_INTERVAL` - Memory store sweep interval (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Result<Self> {
        let tavily_api_key = env::var("TAVILY_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                SearchError::MissingCredential(
                    "TAVILY_API_KEY environment variable not set".to_string(),
                )
            })?;

        let cache_backend = match env::var("CACHE_BACKEND") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{}, falling back to redis", e);
                CacheBackend::Redis
            }),
            Err(_) => CacheBackend::default(),
        };

        let defaults = RedisSettings::default();
        let redis = RedisSettings {
            host: env::var("REDIS_HOST").unwrap_or(defaults.host),
            port: env_or("REDIS_PORT", defaults.port),
            db: env_or("REDIS_DB", defaults.db),
            password: env::var("REDIS_PASSWORD").ok().filter(|p| !p.is_empty()),
            connect_timeout: env_or("REDIS_CONNECT_TIMEOUT_SECS", defaults.connect_timeout),
            command_timeout_ms: env_or("REDIS_COMMAND_TIMEOUT_MS", defaults.command_timeout_ms),
        };

        Ok(Self {
            tavily_api_key,
            tavily_api_url: env::var("TAVILY_API_URL")
                .unwrap_or_else(|_| DEFAULT_TAVILY_API_URL.to_string()),
            search_timeout: env_or("SEARCH_TIMEOUT_SECS", 30),
            cache_backend,
            redis,
            ttl_time: env::var("TTL_TIME").ok().and_then(|v| v.parse().ok()),
            cleanup_interval: env_or("CLEANUP_INTERVAL", 60),
            server_port: env_or("SERVER_PORT", 3000),
        })
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tavily_api_key: String::new(),
            tavily_api_url: DEFAULT_TAVILY_API_URL.to_string(),
            search_timeout: 30,
            cache_backend: CacheBackend::Redis,
            redis: RedisSettings::default(),
            ttl_time: None,
            cleanup_interval: 60,
            server_port: 3000,
        }
    }
}
