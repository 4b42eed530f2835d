//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use ledger_cache::{api::create_router, AppState, CacheClient, Config, MemoryStore};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (Router, CacheClient) {
    let state = AppState::from_config(Arc::new(MemoryStore::new()), &Config::default());
    let client = state.cache.clone();
    (create_router(state), client)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (app, client) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "OK");
    assert!(json.get("timestamp").is_some());

    // Probe sentinel is gone once the response is out
    assert_eq!(client.get("__health_check__").await.unwrap(), None);
}

// == Flush Endpoint Tests ==

#[tokio::test]
async fn test_flush_endpoint_clears_cache() {
    let (app, client) = create_test_app();
    client.set("quote-YAHOO:AAPL", "189.5", None).await.unwrap();
    client.set("portfolio-snapshot-u1", "{}", None).await.unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/cache/flush")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert!(json["message"].as_str().unwrap().contains("flushed"));

    assert_eq!(client.get("quote-YAHOO:AAPL").await.unwrap(), None);
    assert_eq!(client.get("portfolio-snapshot-u1").await.unwrap(), None);
}

// == Snapshot Invalidation Endpoint Tests ==

#[tokio::test]
async fn test_remove_snapshots_endpoint() {
    let (app, client) = create_test_app();
    client.set("portfolio-snapshot-u1", "a", None).await.unwrap();
    client.set("portfolio-snapshot-u1-abc", "b", None).await.unwrap();
    client.set("portfolio-snapshot-u2", "c", None).await.unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/cache/portfolio-snapshots/u1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["user_id"], "u1");
    assert_eq!(json["removed"], 2);

    assert!(client.get("portfolio-snapshot-u2").await.unwrap().is_some());
}

#[tokio::test]
async fn test_remove_snapshots_blank_user_is_bad_request() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/cache/portfolio-snapshots/%20")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("User id"));
}

#[tokio::test]
async fn test_unknown_route() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/cache/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
