//! Storefront API 模块 (公开，无需认证)
//!
//! 按租户 slug 提供店面信息、菜单浏览和在线下单。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/storefront/{slug}", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/info", get(handler::info))
        .route("/menu", get(handler::menu))
        .route("/orders", post(handler::place_order))
}
