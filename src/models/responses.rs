//! Response DTOs for the HTTP surface
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the health endpoint (GET /api/v1/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// `OK` or `UNAVAILABLE`
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self::with_status("OK")
    }

    pub fn unavailable() -> Self {
        Self::with_status("UNAVAILABLE")
    }

    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the flush operation (POST /api/v1/cache/flush)
#[derive(Debug, Clone, Serialize)]
pub struct FlushResponse {
    pub message: String,
}

impl FlushResponse {
    pub fn new() -> Self {
        Self {
            message: "Cache flushed successfully".to_string(),
        }
    }
}

impl Default for FlushResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for snapshot invalidation
/// (DELETE /api/v1/cache/portfolio-snapshots/:user_id)
#[derive(Debug, Clone, Serialize)]
pub struct InvalidationResponse {
    pub user_id: String,
    /// Number of keys submitted for deletion
    pub removed: usize,
}

impl InvalidationResponse {
    pub fn new(user_id: impl Into<String>, removed: usize) -> Self {
        Self {
            user_id: user_id.into(),
            removed,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
