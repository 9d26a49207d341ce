//! Cache Module
//!
//! Key derivation, the store contract and its Redis, in-memory and null backends.

mod entry;
mod key;
mod memory;
mod redis_store;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

// Re-export public types
pub use entry::CacheEntry;
pub use key::{CacheKey, CACHE_NAMESPACE};
pub use memory::MemoryStore;
pub use redis_store::RedisStore;
pub use stats::{SearchStats, StatsRecorder};
pub use store::{CacheStore, NullStore};

use crate::config::{CacheBackend, Config};

// == Cache Provider ==
/// The configured store, kept concrete so callers can reach backend-specific
/// handles (the memory store needs its sweep task).
#[derive(Clone)]
pub enum CacheProvider {
    Redis(Arc<RedisStore>),
    Memory(Arc<MemoryStore>),
    Null(Arc<NullStore>),
}

impl CacheProvider {
    /// Builds the backend selected by `config.cache_backend`.
    pub async fn connect(config: &Config) -> Self {
        match config.cache_backend {
            CacheBackend::Redis => Self::Redis(Arc::new(RedisStore::connect(&config.redis).await)),
            CacheBackend::Memory => Self::Memory(Arc::new(MemoryStore::new())),
            CacheBackend::None => Self::Null(Arc::new(NullStore)),
        }
    }

    pub fn store(&self) -> Arc<dyn CacheStore> {
        match self {
            Self::Redis(store) => store.clone(),
            Self::Memory(store) => store.clone(),
            Self::Null(store) => store.clone(),
        }
    }

    pub fn memory(&self) -> Option<Arc<MemoryStore>> {
        match self {
            Self::Memory(store) => Some(store.clone()),
            _ => None,
        }
    }
}
