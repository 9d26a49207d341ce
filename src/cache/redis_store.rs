//! Redis Store Module
//!
//! Cache backend on a shared Redis instance. Reachability is probed once
//! at construction; a failed probe disables the store for the lifetime of
//! the process. Every later command is bounded by the command timeout, so
//! a Redis that stalls after startup degrades into cache misses.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, ConnectionAddr, ConnectionInfo, RedisConnectionInfo, RedisResult};
use tracing::{info, warn};

use crate::cache::CacheStore;
use crate::config::RedisSettings;
use crate::error::{Result, SearchError};

// == Redis Store ==
pub struct RedisStore {
    /// `None` once the startup probe has failed
    conn: Option<ConnectionManager>,
    location: String,
    command_timeout: Duration,
}

impl RedisStore {
    /// Connects and pings Redis, bounded by `settings.connect_timeout`.
    ///
    /// Never fails: an unreachable server yields a disabled store.
    pub async fn connect(settings: &RedisSettings) -> Self {
        let location = format!("{}:{}", settings.host, settings.port);
        let command_timeout = Duration::from_millis(settings.command_timeout_ms);

        let conn = match Self::open(settings).await {
            Ok(conn) => {
                info!("Connected to Redis at {} (db {})", location, settings.db);
                Some(conn)
            }
            Err(e) => {
                warn!(
                    "Could not connect to Redis at {}: {}. Caching will be disabled.",
                    location, e
                );
                None
            }
        };

        Self {
            conn,
            location,
            command_timeout,
        }
    }

    /// A store that never reaches Redis.
    pub fn disabled() -> Self {
        Self {
            conn: None,
            location: String::new(),
            command_timeout: Duration::ZERO,
        }
    }

    async fn open(settings: &RedisSettings) -> Result<ConnectionManager> {
        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(settings.host.clone(), settings.port),
            redis: RedisConnectionInfo {
                db: settings.db,
                password: settings.password.clone(),
                ..Default::default()
            },
        };
        let client = redis::Client::open(info)?;
        let timeout = Duration::from_secs(settings.connect_timeout);

        // Single-attempt probe first; the manager itself retries on connect.
        let probe = async {
            let mut conn = client.get_multiplexed_async_connection().await?;
            let _: String = redis::cmd("PING").query_async(&mut conn).await?;
            ConnectionManager::new(client.clone()).await
        };

        tokio::time::timeout(timeout, probe)
            .await
            .map_err(|_| {
                SearchError::Cache(format!("connection probe timed out after {:?}", timeout))
            })?
            .map_err(SearchError::from)
    }

    fn connection(&self) -> Result<ConnectionManager> {
        // ConnectionManager clones share one multiplexed connection
        self.conn.clone().ok_or(SearchError::CacheUnavailable)
    }

    async fn bounded<T>(
        &self,
        command: &str,
        fut: impl Future<Output = RedisResult<T>>,
    ) -> Result<T> {
        match tokio::time::timeout(self.command_timeout, fut).await {
            Ok(reply) => Ok(reply?),
            Err(_) => Err(SearchError::Cache(format!(
                "{} on {} timed out after {:?}",
                command, self.location, self.command_timeout
            ))),
        }
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    fn backend_name(&self) -> &'static str {
        "redis"
    }

    fn is_available(&self) -> bool {
        self.conn.is_some()
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection()?;
        self.bounded("GET", conn.get(key)).await
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let mut conn = self.connection()?;
        self.bounded("SETEX", conn.set_ex(key, value, ttl_secs)).await
    }
}
