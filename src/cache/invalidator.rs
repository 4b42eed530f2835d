//! Bulk Invalidation Module
//!
//! Namespace-scoped removal of cached entries.

use tracing::{info, warn};

use crate::cache::CacheClient;
use crate::error::Result;
use crate::keys::{portfolio_snapshot_key, Filter};

// == Bulk Invalidator ==
/// Removes groups of entries sharing a key namespace.
#[derive(Debug, Clone)]
pub struct BulkInvalidator {
    client: CacheClient,
}

impl BulkInvalidator {
    pub fn new(client: CacheClient) -> Self {
        Self { client }
    }

    // == Remove Portfolio Snapshots ==
    /// Deletes every portfolio snapshot cached for `user_id`, filtered or not.
    ///
    /// Best effort: if the key scan is cut short only the keys seen so far are
    /// deleted. Returns the number of keys submitted for deletion.
    pub async fn remove_portfolio_snapshots_by_user_id(&self, user_id: &str) -> Result<usize> {
        let prefix = portfolio_snapshot_key::<Filter>(user_id, &[])?;

        let outcome = self.client.iterate(Some(prefix.as_str())).collect_outcome().await;
        if outcome.is_truncated() {
            warn!(
                user_id,
                collected = outcome.keys().len(),
                "Portfolio snapshot scan incomplete, some snapshots may remain cached"
            );
        }

        let keys = outcome.into_keys();
        self.client.delete_many(&keys).await?;

        info!(user_id, removed = keys.len(), "Removed portfolio snapshots");
        Ok(keys.len())
    }

    // == Reset ==
    /// Wipes the whole cache.
    pub async fn reset(&self) -> Result<()> {
        self.client.clear().await?;
        info!("Cache reset");
        Ok(())
    }
}
