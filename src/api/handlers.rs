//! API Handlers
//!
//! HTTP request handlers exposing health and cache maintenance operations.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::cache::{BulkInvalidator, CacheClient};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::health::HealthMonitor;
use crate::models::{FlushResponse, HealthResponse, InvalidationResponse};
use crate::store::KeyValueStore;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub cache: CacheClient,
    pub invalidator: BulkInvalidator,
    pub health: HealthMonitor,
}

impl AppState {
    /// Wires the cache components around one shared client.
    pub fn new(cache: CacheClient) -> Self {
        Self {
            invalidator: BulkInvalidator::new(cache.clone()),
            health: HealthMonitor::new(cache.clone()),
            cache,
        }
    }

    /// Creates a new AppState over `store` using the configured default TTL.
    pub fn from_config(store: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        Self::new(CacheClient::new(store, config.default_ttl))
    }
}

/// Handler for GET /api/v1/health
///
/// Responds 200 when the store passes the health probe, 503 otherwise.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    if state.health.is_healthy().await {
        (StatusCode::OK, Json(HealthResponse::ok()))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse::unavailable()),
        )
    }
}

/// Handler for POST /api/v1/cache/flush
pub async fn flush_handler(State(state): State<AppState>) -> Result<Json<FlushResponse>> {
    state.invalidator.reset().await?;
    Ok(Json(FlushResponse::new()))
}

/// Handler for DELETE /api/v1/cache/portfolio-snapshots/:user_id
pub async fn remove_snapshots_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<InvalidationResponse>> {
    if user_id.trim().is_empty() {
        return Err(CacheError::InvalidRequest(
            "User id cannot be empty".to_string(),
        ));
    }

    let removed = state
        .invalidator
        .remove_portfolio_snapshots_by_user_id(&user_id)
        .await?;

    Ok(Json(InvalidationResponse::new(user_id, removed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn state() -> AppState {
        AppState::from_config(Arc::new(MemoryStore::new()), &Config::default())
    }

    #[tokio::test]
    async fn test_health_handler() {
        let (status, response) = health_handler(State(state())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.status, "OK");
    }

    #[tokio::test]
    async fn test_flush_handler() {
        let state = state();
        state.cache.set("quote-YAHOO:AAPL", "1", None).await.unwrap();

        let result = flush_handler(State(state.clone())).await;
        assert!(result.is_ok());
        assert_eq!(state.cache.get("quote-YAHOO:AAPL").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_snapshots_handler() {
        let state = state();
        state.cache.set("portfolio-snapshot-u1", "a", None).await.unwrap();
        state.cache.set("portfolio-snapshot-u2", "b", None).await.unwrap();

        let response = remove_snapshots_handler(State(state.clone()), Path("u1".to_string()))
            .await
            .unwrap();

        assert_eq!(response.removed, 1);
        assert!(state.cache.get("portfolio-snapshot-u2").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_remove_snapshots_blank_user() {
        let result = remove_snapshots_handler(State(state()), Path(" ".to_string())).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }
}
