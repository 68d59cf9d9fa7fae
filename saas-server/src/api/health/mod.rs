//! Health API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(handler::health))
        .route("/health/detailed", get(handler::health_detailed))
}
