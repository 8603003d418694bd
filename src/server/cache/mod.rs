//! Cache-aside storage for collection snapshots.
//!
//! `CacheStore` is the raw key/value port with per-entry TTL. `CacheAside` layers the
//! read-through pattern on top of it: list endpoints call `get_or_load`, and every
//! successful write to a collection calls `invalidate` before responding so the next
//! read recomputes the snapshot.

pub mod memory;
pub mod redis_cache;

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::server::error::AppError;

pub use self::{memory::MemoryCache, redis_cache::RedisCache};

/// Lifetime of a collection snapshot.
pub const LIST_TTL: Duration = Duration::from_secs(30);

/// Fixed logical key per cached collection.
pub mod keys {
    pub const ALL_CONTENT: &str = "allContent";
    pub const ALL_GENRE: &str = "allGenre";
    pub const ALL_CATEGORY: &str = "allCategory";
    pub const ALL_SPONSOR: &str = "allSponsor";
}

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis cache operation failed: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Key/value store holding serialized snapshots with a time-to-live.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the live value for `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key`, replacing any previous entry.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    /// Removes `key`. Deleting an absent key is a no-op.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}

/// Read-through helper over a `CacheStore`.
pub struct CacheAside<'a> {
    store: &'a dyn CacheStore,
}

impl<'a> CacheAside<'a> {
    pub fn new(store: &'a dyn CacheStore) -> Self {
        Self { store }
    }

    /// Returns the cached snapshot under `key`, or computes it with `load` and caches it.
    ///
    /// A live entry is returned without calling `load`. An entry that no longer
    /// deserializes is treated as a miss and overwritten.
    ///
    /// # Arguments
    /// - `key` - Collection key, one of [`keys`]
    /// - `ttl` - Lifetime of a freshly stored snapshot
    /// - `load` - Computes the snapshot from the backing store on a miss
    ///
    /// # Returns
    /// - `Ok(T)` - Cached or freshly loaded snapshot
    /// - `Err(AppError)` - Cache backend failure or error from `load`
    pub async fn get_or_load<T, F, Fut>(&self, key: &str, ttl: Duration, load: F) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        if let Some(raw) = self.store.get(key).await? {
            match serde_json::from_str::<T>(&raw) {
                Ok(value) => {
                    tracing::debug!("Cache hit for {}", key);
                    return Ok(value);
                }
                Err(e) => tracing::warn!("Discarding unreadable cache entry {}: {}", key, e),
            }
        }

        let value = load().await?;
        self.store.set(key, serde_json::to_string(&value)?, ttl).await?;

        Ok(value)
    }

    /// Deletes the snapshot under `key` so the next read recomputes it.
    pub async fn invalidate(&self, key: &str) -> Result<(), AppError> {
        self.store.delete(key).await?;
        tracing::debug!("Invalidated cache entry {}", key);
        Ok(())
    }
}

#[cfg(test)]
mod test;
