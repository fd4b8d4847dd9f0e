//! HTTP API routes

mod health;
pub mod employees;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Top-level application router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health::health))
        .merge(employees::router())
}
