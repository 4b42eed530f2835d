//! Cache Client Module
//!
//! Single point of access to the key-value store. Injects the configured
//! default TTL and logs store failures before handing them back unchanged.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use crate::cache::KeyScan;
use crate::error::{CacheError, Result};
use crate::store::KeyValueStore;

const COMPONENT: &str = "CacheClient";

// == Cache Client ==
/// Cheap-to-clone handle over a shared store.
#[derive(Clone)]
pub struct CacheClient {
    store: Arc<dyn KeyValueStore>,
    default_ttl: Duration,
}

impl CacheClient {
    // == Constructor ==
    /// Creates a client over `store`, applying `default_ttl` to writes that
    /// don't specify their own.
    pub fn new(store: Arc<dyn KeyValueStore>, default_ttl: Duration) -> Self {
        Self { store, default_ttl }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Get ==
    /// Returns the value stored under `key`, or `None` if it is missing or expired.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        self.store
            .get(key)
            .await
            .inspect_err(|err| log_failure("get", err))
    }

    // == Set ==
    /// Stores `value` under `key` for `ttl`, or the default TTL when `None`.
    ///
    /// Overwrites any existing value and its expiration.
    pub async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        debug!(key, ttl_ms, "cache set");

        self.store
            .set(key, value, ttl)
            .await
            .inspect_err(|err| log_failure("set", err))
    }

    // == Delete ==
    /// Removes `key`. Deleting an absent key is not an error.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.store
            .delete(key)
            .await
            .inspect_err(|err| log_failure("delete", err))
    }

    // == Delete Many ==
    /// Removes `keys` in a single batch. An empty batch never reaches the store.
    pub async fn delete_many(&self, keys: &[String]) -> Result<()> {
        if keys.is_empty() {
            return Ok(());
        }

        self.store
            .delete_many(keys)
            .await
            .inspect_err(|err| log_failure("delete_many", err))
    }

    // == Iterate ==
    /// Lazily enumerates keys, restricted to those starting with `prefix` if given.
    ///
    /// Never fails: a store fault ends the stream early, see [`KeyScan`].
    pub fn iterate(&self, prefix: Option<&str>) -> KeyScan<'_> {
        let prefix = prefix.map(str::to_string);
        KeyScan::new(self.store.scan(prefix.clone()), prefix)
    }

    // == Clear ==
    /// Removes every entry in the store.
    pub async fn clear(&self) -> Result<()> {
        self.store
            .clear()
            .await
            .inspect_err(|err| log_failure("clear", err))
    }
}

fn log_failure(operation: &str, err: &CacheError) {
    error!(component = COMPONENT, operation, error = %err, "Cache store operation failed");
}

impl std::fmt::Debug for CacheClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheClient")
            .field("store", &"<dyn KeyValueStore>")
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}
