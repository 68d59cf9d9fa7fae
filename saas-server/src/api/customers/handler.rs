//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{Customer, CustomerCreate, CustomerUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult, validation};

#[derive(Deserialize)]
pub struct CustomerListQuery {
    /// Matches name or phone (substring)
    pub search: Option<String>,
}

/// GET /api/customers?search= - 获取客户列表
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<CustomerListQuery>,
) -> AppResult<Json<Vec<Customer>>> {
    let tenant_id = user.require_tenant()?;
    let customers =
        repository::customer::list(state.get_pool(), tenant_id, query.search.as_deref()).await?;
    Ok(Json(customers))
}

/// GET /api/customers/{id} - 获取单个客户
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let tenant_id = user.require_tenant()?;
    let customer = repository::customer::get(state.get_pool(), tenant_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {id} not found")))?;
    Ok(Json(customer))
}

/// POST /api/customers - 创建客户
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<Json<Customer>> {
    let tenant_id = user.require_tenant()?;
    validation::validate_required_text(&payload.name, "name", validation::MAX_NAME_LEN)?;
    validation::validate_optional_text(&payload.phone, "phone", validation::MAX_SHORT_TEXT_LEN)?;
    validation::validate_optional_text(&payload.email, "email", validation::MAX_EMAIL_LEN)?;
    validation::validate_optional_text(&payload.address, "address", validation::MAX_ADDRESS_LEN)?;
    validation::validate_optional_text(&payload.note, "note", validation::MAX_NOTE_LEN)?;
    let customer = repository::customer::create(state.get_pool(), tenant_id, payload).await?;
    Ok(Json(customer))
}

/// PUT /api/customers/{id} - 更新客户
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<Customer>> {
    let tenant_id = user.require_tenant()?;
    validation::validate_optional_text(&payload.name, "name", validation::MAX_NAME_LEN)?;
    validation::validate_optional_text(&payload.phone, "phone", validation::MAX_SHORT_TEXT_LEN)?;
    validation::validate_optional_text(&payload.email, "email", validation::MAX_EMAIL_LEN)?;
    validation::validate_optional_text(&payload.address, "address", validation::MAX_ADDRESS_LEN)?;
    validation::validate_optional_text(&payload.note, "note", validation::MAX_NOTE_LEN)?;
    let customer = repository::customer::update(state.get_pool(), tenant_id, id, payload).await?;
    Ok(Json(customer))
}

/// DELETE /api/customers/{id} - 删除客户 (历史订单保留)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let tenant_id = user.require_tenant()?;
    let result = repository::customer::delete(state.get_pool(), tenant_id, id).await?;
    Ok(Json(result))
}
