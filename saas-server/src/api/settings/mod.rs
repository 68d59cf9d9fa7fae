//! Settings API 模块 (公司设置 + 系统键值设置)

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/settings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/company",
            get(handler::get_company).put(handler::update_company),
        )
        .route("/system", get(handler::list_system))
        .route(
            "/system/{key}",
            get(handler::get_system)
                .put(handler::set_system)
                .delete(handler::delete_system),
        )
}
