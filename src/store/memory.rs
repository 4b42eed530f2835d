//! Memory Store Module
//!
//! In-process key-value store with per-entry expiration.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::RwLock;

use crate::error::Result;
use crate::store::entry::{current_timestamp_ms, StoredValue};
use crate::store::KeyValueStore;

// == Memory Store ==
/// HashMap-backed store. Cloning shares the same underlying map.
///
/// Expired entries are treated as absent immediately and physically removed
/// by [`MemoryStore::purge_expired`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, StoredValue>>>,
}

impl MemoryStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Purge Expired ==
    /// Removes all expired entries from the map.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let now = current_timestamp_ms();
        let mut entries = self.entries.write().await;
        let before = entries.len();

        entries.retain(|_, entry| !entry.is_expired_at(now));

        before - entries.len()
    }

    // == Length ==
    /// Number of physically stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn live_keys(&self, prefix: Option<&str>) -> Vec<String> {
        let now = current_timestamp_ms();
        let entries = self.entries.read().await;

        entries
            .iter()
            .filter(|(key, entry)| {
                !entry.is_expired_at(now) && prefix.map_or(true, |p| key.starts_with(p))
            })
            .map(|(key, _)| key.clone())
            .collect()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;

        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let entry = StoredValue::new(value.to_string(), ttl);
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn delete_many(&self, keys: &[String]) -> Result<()> {
        let mut entries = self.entries.write().await;
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.write().await.clear();
        Ok(())
    }

    fn scan(&self, prefix: Option<String>) -> BoxStream<'_, Result<String>> {
        stream::once(async move { self.live_keys(prefix.as_deref()).await })
            .flat_map(|keys| stream::iter(keys.into_iter().map(Ok)))
            .boxed()
    }
}
