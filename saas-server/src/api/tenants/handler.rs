//! Tenant API Handlers
//!
//! 所有接口仅平台管理员可用。

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{Tenant, TenantCreate, TenantUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult};

/// GET /api/tenants - 获取所有租户
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Tenant>>> {
    user.require_platform()?;
    let tenants = repository::tenant::list(state.get_pool()).await?;
    Ok(Json(tenants))
}

/// GET /api/tenants/{id} - 获取单个租户
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Tenant>> {
    user.require_platform()?;
    let tenant = repository::tenant::get(state.get_pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Tenant {id} not found")))?;
    Ok(Json(tenant))
}

/// POST /api/tenants - 创建租户
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<TenantCreate>,
) -> AppResult<Json<Tenant>> {
    user.require_platform()?;
    let tenant = repository::tenant::create(state.get_pool(), payload).await?;
    Ok(Json(tenant))
}

/// PUT /api/tenants/{id} - 更新租户
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<TenantUpdate>,
) -> AppResult<Json<Tenant>> {
    user.require_platform()?;
    let tenant = repository::tenant::update(state.get_pool(), id, payload).await?;
    Ok(Json(tenant))
}

/// DELETE /api/tenants/{id} - 删除租户 (有订单或用户时拒绝)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    user.require_platform()?;
    let result = repository::tenant::delete(state.get_pool(), id).await?;
    Ok(Json(result))
}
