//! Health Monitor
//!
//! Bounded-time liveness probe: write a sentinel, read it back, and give up
//! after a fixed window.

use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, error};

use crate::cache::CacheClient;
use crate::error::CacheError;
use crate::keys::HEALTH_CHECK_KEY;

const COMPONENT: &str = "HealthMonitor";

/// How long the probe may take before the store is reported unhealthy
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Lifetime of the sentinel entry written by the probe
pub const DEFAULT_PROBE_TTL: Duration = Duration::from_secs(1);

/// Upper bound on the post-probe sentinel delete
const CLEANUP_TIMEOUT: Duration = Duration::from_millis(500);

// == Health Check Failure ==
/// Why a probe did not succeed. Logged, never returned to callers.
#[derive(Error, Debug)]
pub enum HealthCheckFailure {
    #[error("probe did not complete within {0:?}")]
    Timeout(Duration),

    #[error("read back {read:?}, expected {written:?}")]
    Mismatch {
        written: String,
        read: Option<String>,
    },

    #[error("store error during probe: {0}")]
    Store(#[from] CacheError),

    #[error("probe task aborted: {0}")]
    Aborted(#[from] JoinError),
}

// == Health Monitor ==
#[derive(Debug, Clone)]
pub struct HealthMonitor {
    client: CacheClient,
    timeout: Duration,
    probe_ttl: Duration,
}

impl HealthMonitor {
    pub fn new(client: CacheClient) -> Self {
        Self {
            client,
            timeout: DEFAULT_TIMEOUT,
            probe_ttl: DEFAULT_PROBE_TTL,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_probe_ttl(mut self, probe_ttl: Duration) -> Self {
        self.probe_ttl = probe_ttl;
        self
    }

    // == Is Healthy ==
    /// Returns true if the store accepted a write and returned the same value
    /// within the timeout window.
    ///
    /// The probe runs as its own task and is left running if the timer wins;
    /// its late result is discarded. The sentinel is deleted afterwards in
    /// every case; cleanup errors are ignored and the delete is abandoned
    /// after a short bound so a hung store cannot stall the caller.
    pub async fn is_healthy(&self) -> bool {
        let outcome = self.check().await;

        match tokio::time::timeout(CLEANUP_TIMEOUT, self.client.delete(HEALTH_CHECK_KEY)).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                debug!(component = COMPONENT, error = %err, "Sentinel cleanup failed");
            }
            Err(_) => {
                debug!(component = COMPONENT, "Sentinel cleanup timed out");
            }
        }

        match outcome {
            Ok(()) => true,
            Err(failure) => {
                error!(component = COMPONENT, reason = %failure, "Cache health check failed");
                false
            }
        }
    }

    async fn check(&self) -> Result<(), HealthCheckFailure> {
        let written = chrono::Utc::now().timestamp_millis().to_string();

        let probe_task = tokio::spawn(probe(self.client.clone(), written.clone(), self.probe_ttl));

        tokio::select! {
            joined = probe_task => {
                let read = joined??;
                if read.as_deref() == Some(written.as_str()) {
                    Ok(())
                } else {
                    Err(HealthCheckFailure::Mismatch { written, read })
                }
            }
            _ = tokio::time::sleep(self.timeout) => {
                Err(HealthCheckFailure::Timeout(self.timeout))
            }
        }
    }
}

async fn probe(
    client: CacheClient,
    value: String,
    ttl: Duration,
) -> Result<Option<String>, CacheError> {
    client.set(HEALTH_CHECK_KEY, &value, Some(ttl)).await?;
    client.get(HEALTH_CHECK_KEY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_healthy_store() {
        let store = MemoryStore::new();
        let client = CacheClient::new(Arc::new(store.clone()), Duration::from_secs(300));

        assert!(HealthMonitor::new(client.clone()).is_healthy().await);
        assert_eq!(client.get(HEALTH_CHECK_KEY).await.unwrap(), None);
        assert!(store.is_empty().await, "sentinel must be removed");
    }

    #[tokio::test]
    async fn test_overrides() {
        let client = CacheClient::new(Arc::new(MemoryStore::new()), Duration::from_secs(300));
        let monitor = HealthMonitor::new(client)
            .with_timeout(Duration::from_millis(500))
            .with_probe_ttl(Duration::from_millis(200));

        assert_eq!(monitor.timeout, Duration::from_millis(500));
        assert_eq!(monitor.probe_ttl, Duration::from_millis(200));
        assert!(monitor.is_healthy().await);
    }

    #[test]
    fn test_failure_messages() {
        let mismatch = HealthCheckFailure::Mismatch {
            written: "1".to_string(),
            read: None,
        };
        assert_eq!(mismatch.to_string(), "read back None, expected \"1\"");

        let timeout = HealthCheckFailure::Timeout(Duration::from_secs(2));
        assert_eq!(timeout.to_string(), "probe did not complete within 2s");
    }
}
