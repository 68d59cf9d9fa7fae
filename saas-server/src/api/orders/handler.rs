//! Order API Handlers
//!
//! 金额一律由服务端根据菜单价格和公司设置推导，请求体不接受金额字段。

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{Order, OrderCreate, OrderDetail, OrderStatus, OrderStatusUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult, validation};

const DEFAULT_PAGE_SIZE: i64 = 50;

#[derive(Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/orders?status=&limit=&offset= - 订单列表 (最新在前)
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let tenant_id = user.require_tenant()?;
    let status = match query.status.as_deref() {
        Some(s) => Some(OrderStatus::from_str(s).map_err(AppError::validation)?),
        None => None,
    };
    let orders = repository::order::list(
        state.get_pool(),
        tenant_id,
        status,
        query.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        query.offset.unwrap_or(0),
    )
    .await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id} - 订单详情 (含行项目与时间线)
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderDetail>> {
    let tenant_id = user.require_tenant()?;
    let detail = repository::order::get_detail(state.get_pool(), tenant_id, id).await?;
    Ok(Json(detail))
}

/// POST /api/orders - 创建订单 (后台下单)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<OrderDetail>> {
    let tenant_id = user.require_tenant()?;
    validation::validate_optional_text(&payload.note, "note", validation::MAX_NOTE_LEN)?;
    validation::validate_optional_text(
        &payload.customer_name,
        "customer_name",
        validation::MAX_NAME_LEN,
    )?;
    let detail = repository::order::create(state.get_pool(), tenant_id, payload).await?;
    Ok(Json(detail))
}

/// PUT /api/orders/{id}/status - 状态流转 (终态拒绝)
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<OrderDetail>> {
    let tenant_id = user.require_tenant()?;
    let status = OrderStatus::from_str(&payload.status).map_err(AppError::validation)?;
    validation::validate_optional_text(&payload.note, "note", validation::MAX_NOTE_LEN)?;
    let detail =
        repository::order::update_status(state.get_pool(), tenant_id, id, status, payload.note)
            .await?;
    Ok(Json(detail))
}

/// DELETE /api/orders/{id} - 取消订单 (不做物理删除)
pub async fn cancel(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderDetail>> {
    let tenant_id = user.require_tenant()?;
    let detail = repository::order::cancel(state.get_pool(), tenant_id, id).await?;
    Ok(Json(detail))
}
