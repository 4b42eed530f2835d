//! Store Module
//!
//! The key-value store the cache layer delegates persistence to, plus the
//! implementations shipped with the crate.

mod entry;
mod memory;
#[cfg(feature = "redis")]
mod redis_store;

use std::time::Duration;

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::Result;

pub use memory::MemoryStore;
#[cfg(feature = "redis")]
pub use redis_store::RedisStore;

// == Key Value Store ==
/// Operations the cache layer needs from the underlying store.
///
/// Implementations must be safe to share between tasks and must report
/// connectivity problems as errors rather than as missing values.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value for `key`, or `None` if it is absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value and expiration.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Removes all `keys` in one batch.
    async fn delete_many(&self, keys: &[String]) -> Result<()>;

    /// Removes every entry.
    async fn clear(&self) -> Result<()>;

    /// Lazily enumerates live keys, optionally restricted to those starting
    /// with `prefix`. A failure partway through is yielded as an `Err` item.
    fn scan(&self, prefix: Option<String>) -> BoxStream<'_, Result<String>>;
}
