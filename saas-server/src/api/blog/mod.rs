//! Blog API 模块
//!
//! 公开读取接口 + 平台管理员 CRUD。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/blog", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        // Public (auth middleware lets GETs through)
        .route("/posts", get(handler::list_published))
        .route("/posts/{slug}", get(handler::get_published))
        // Admin
        .route(
            "/admin/posts",
            get(handler::admin_list).post(handler::admin_create),
        )
        .route(
            "/admin/posts/{id}",
            get(handler::admin_get)
                .put(handler::admin_update)
                .delete(handler::admin_delete),
        )
}
