//! API Module
//!
//! Thin HTTP surface over the cache layer.
//!
//! # Endpoints
//! - `GET /api/v1/health` - Store liveness probe
//! - `POST /api/v1/cache/flush` - Remove every cached entry
//! - `DELETE /api/v1/cache/portfolio-snapshots/:user_id` - Drop a user's snapshots

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
