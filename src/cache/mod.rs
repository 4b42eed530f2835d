//! Cache Module
//!
//! The caller-facing cache layer: the client facade over the store, best-effort
//! key scans, and namespace invalidation.

mod client;
mod invalidator;
mod scan;


// Re-export public types
pub use client::CacheClient;
pub use invalidator::BulkInvalidator;
pub use scan::{KeyScan, ScanOutcome};
