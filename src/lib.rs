//! Ledger Cache - caching layer in front of an external key-value store
//!
//! Derives canonical cache keys, applies a default TTL to writes, invalidates
//! whole key namespaces and reports store liveness within a bounded time.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod health;
pub mod keys;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use cache::{BulkInvalidator, CacheClient, KeyScan, ScanOutcome};
pub use config::Config;
pub use error::{CacheError, Result};
pub use health::HealthMonitor;
pub use store::{KeyValueStore, MemoryStore};
pub use tasks::spawn_purge_task;
