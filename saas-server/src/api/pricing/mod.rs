//! Pricing API 模块
//!
//! 公开价格页 + 平台管理员 CRUD。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/pricing", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        // Public (auth middleware lets this GET through)
        .route("/packages", get(handler::list_active))
        // Admin
        .route(
            "/admin/packages",
            get(handler::admin_list).post(handler::admin_create),
        )
        .route(
            "/admin/packages/{id}",
            get(handler::admin_get)
                .put(handler::admin_update)
                .delete(handler::admin_delete),
        )
}
