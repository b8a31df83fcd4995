//! Top-level router

use axum::{routing::get, Router};

use crate::fare;

pub mod health;

pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api/fare", fare::router())
}
