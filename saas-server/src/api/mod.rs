//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`tenants`] - 租户管理接口 (平台管理员)
//! - [`users`] - 用户管理接口
//! - [`settings`] - 公司/系统设置接口
//! - [`categories`] - 菜单分类管理接口
//! - [`menu_items`] - 菜单项管理接口
//! - [`customers`] - 客户管理接口
//! - [`orders`] - 订单管理接口
//! - [`tables`] - 桌台管理接口
//! - [`reservations`] - 预订管理接口
//! - [`blog`] - 营销站博客接口
//! - [`pricing`] - 营销站价格接口
//! - [`storefront`] - 店面公共接口

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::require_auth;
use crate::core::ServerState;

pub mod auth;
pub mod health;

// Platform / marketing site
pub mod blog;
pub mod pricing;
pub mod tenants;

// Back office
pub mod categories;
pub mod customers;
pub mod menu_items;
pub mod orders;
pub mod reservations;
pub mod settings;
pub mod tables;
pub mod users;

// Public storefront
pub mod storefront;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(
            HeaderValue::from_str(&id).unwrap_or(HeaderValue::from_static("unknown")),
        ))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(tenants::router())
        .merge(users::router())
        .merge(settings::router())
        .merge(categories::router())
        .merge(menu_items::router())
        .merge(customers::router())
        .merge(orders::router())
        .merge(tables::router())
        .merge(reservations::router())
        .merge(blog::router())
        .merge(pricing::router())
        .merge(storefront::router())
}

/// Build a fully configured application with all middleware and state
///
/// Used by both the HTTP server and the integration tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // JWT authentication - injects CurrentUser into request extensions
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
}
