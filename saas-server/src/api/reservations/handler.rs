//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{ReservationUpdate, TableReservation};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult, validation};

/// GET /api/reservations - 全部预订 (按预订时间排序)
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<TableReservation>>> {
    let tenant_id = user.require_tenant()?;
    let reservations = repository::reservation::list(state.get_pool(), tenant_id).await?;
    Ok(Json(reservations))
}

/// GET /api/reservations/{id} - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<TableReservation>> {
    let tenant_id = user.require_tenant()?;
    let reservation = repository::reservation::get(state.get_pool(), tenant_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))?;
    Ok(Json(reservation))
}

/// PUT /api/reservations/{id} - 更新预订 (终态拒绝)
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<TableReservation>> {
    let tenant_id = user.require_tenant()?;
    validation::validate_optional_text(
        &payload.customer_name,
        "customer_name",
        validation::MAX_NAME_LEN,
    )?;
    validation::validate_optional_text(&payload.note, "note", validation::MAX_NOTE_LEN)?;
    let reservation =
        repository::reservation::update(state.get_pool(), tenant_id, id, payload).await?;
    Ok(Json(reservation))
}

/// DELETE /api/reservations/{id} - 取消预订 (软删除)
pub async fn cancel(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<TableReservation>> {
    let tenant_id = user.require_tenant()?;
    let reservation = repository::reservation::cancel(state.get_pool(), tenant_id, id).await?;
    Ok(Json(reservation))
}
