//! Restaurant Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{
    ReservationCreate, RestaurantTable, RestaurantTableCreate, RestaurantTableUpdate,
    TableReservation,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult, validation};

/// GET /api/tables - 获取所有桌台
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<RestaurantTable>>> {
    let tenant_id = user.require_tenant()?;
    let tables = repository::restaurant_table::list(state.get_pool(), tenant_id).await?;
    Ok(Json(tables))
}

/// GET /api/tables/{id} - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<RestaurantTable>> {
    let tenant_id = user.require_tenant()?;
    let table = repository::restaurant_table::get(state.get_pool(), tenant_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {id} not found")))?;
    Ok(Json(table))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<RestaurantTableCreate>,
) -> AppResult<Json<RestaurantTable>> {
    let tenant_id = user.require_tenant()?;
    validation::validate_required_text(&payload.name, "name", validation::MAX_NAME_LEN)?;
    let table = repository::restaurant_table::create(state.get_pool(), tenant_id, payload).await?;
    Ok(Json(table))
}

/// PUT /api/tables/{id} - 更新桌台
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<RestaurantTableUpdate>,
) -> AppResult<Json<RestaurantTable>> {
    let tenant_id = user.require_tenant()?;
    validation::validate_optional_text(&payload.name, "name", validation::MAX_NAME_LEN)?;
    let table =
        repository::restaurant_table::update(state.get_pool(), tenant_id, id, payload).await?;
    Ok(Json(table))
}

/// DELETE /api/tables/{id} - 删除桌台 (仍有未取消预订时返回 400)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let tenant_id = user.require_tenant()?;
    let result = repository::restaurant_table::delete(state.get_pool(), tenant_id, id).await?;
    Ok(Json(result))
}

/// GET /api/tables/{id}/reservations - 桌台的预订列表
pub async fn list_reservations(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<TableReservation>>> {
    let tenant_id = user.require_tenant()?;
    repository::restaurant_table::get(state.get_pool(), tenant_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {id} not found")))?;
    let reservations =
        repository::reservation::list_by_table(state.get_pool(), tenant_id, id).await?;
    Ok(Json(reservations))
}

/// POST /api/tables/{id}/reservations - 创建预订
pub async fn create_reservation(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<TableReservation>> {
    let tenant_id = user.require_tenant()?;
    validation::validate_required_text(
        &payload.customer_name,
        "customer_name",
        validation::MAX_NAME_LEN,
    )?;
    validation::validate_optional_text(&payload.note, "note", validation::MAX_NOTE_LEN)?;
    let reservation =
        repository::reservation::create(state.get_pool(), tenant_id, id, payload).await?;
    Ok(Json(reservation))
}
