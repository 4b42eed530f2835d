//! API Routes
//!
//! Configures the Axum router for the health and cache maintenance endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{flush_handler, health_handler, remove_snapshots_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/v1/health` - Store liveness probe
/// - `POST /api/v1/cache/flush` - Remove every cached entry
/// - `DELETE /api/v1/cache/portfolio-snapshots/:user_id` - Drop a user's snapshots
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/cache/flush", post(flush_handler))
        .route(
            "/api/v1/cache/portfolio-snapshots/:user_id",
            delete(remove_snapshots_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
