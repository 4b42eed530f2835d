//! Health Module
//!
//! Store liveness reporting.

mod monitor;

pub use monitor::{HealthCheckFailure, HealthMonitor, DEFAULT_PROBE_TTL, DEFAULT_TIMEOUT};
