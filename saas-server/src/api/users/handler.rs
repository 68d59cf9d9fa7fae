//! User API Handlers
//!
//! 租户 Owner 管理本租户账号；平台管理员通过 ?tenant_id= 管理任意租户。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{User, UserCreate, UserRole, UserUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
pub struct UserListQuery {
    pub tenant_id: Option<i64>,
}

/// Resolve which tenant the caller is operating on
fn resolve_tenant(user: &CurrentUser, requested: Option<i64>) -> Result<i64, AppError> {
    if user.is_platform() {
        requested.ok_or_else(|| AppError::validation("tenant_id query parameter is required"))
    } else {
        user.require_tenant()
    }
}

/// Staff accounts cannot manage users
fn require_manager(user: &CurrentUser) -> Result<(), AppError> {
    if user.role == UserRole::Staff {
        return Err(AppError::forbidden("Owner role required"));
    }
    Ok(())
}

/// GET /api/users - 获取用户列表
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<UserListQuery>,
) -> AppResult<Json<Vec<User>>> {
    let tenant_id = resolve_tenant(&user, query.tenant_id)?;
    let users = repository::user::list_by_tenant(state.get_pool(), tenant_id).await?;
    Ok(Json(users))
}

/// GET /api/users/{id} - 获取单个用户
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let target = repository::user::get(state.get_pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
    if !user.is_platform() && target.tenant_id != user.tenant_id {
        return Err(AppError::not_found(format!("User {id} not found")));
    }
    Ok(Json(target))
}

/// POST /api/users - 创建用户
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<UserListQuery>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<User>> {
    require_manager(&user)?;

    // Platform admins may create other platform accounts (no tenant)
    let tenant_id = if user.is_platform() && payload.role == Some(UserRole::Platform) {
        None
    } else {
        Some(resolve_tenant(&user, query.tenant_id)?)
    };

    // Tenant owners cannot grant platform role
    if !user.is_platform() && payload.role == Some(UserRole::Platform) {
        return Err(AppError::forbidden("Cannot grant platform role"));
    }

    let created = repository::user::create(state.get_pool(), tenant_id, payload).await?;
    Ok(Json(created))
}

/// PUT /api/users/{id} - 更新用户
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<User>> {
    require_manager(&user)?;

    let target = repository::user::get(state.get_pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
    if !user.is_platform() {
        if target.tenant_id != user.tenant_id {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        if payload.role == Some(UserRole::Platform) {
            return Err(AppError::forbidden("Cannot grant platform role"));
        }
    }

    let updated = repository::user::update(state.get_pool(), id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/users/{id} - 删除用户
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    require_manager(&user)?;

    if id == user.id {
        return Err(AppError::validation("Cannot delete your own account"));
    }

    let target = repository::user::get(state.get_pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
    if !user.is_platform() && target.tenant_id != user.tenant_id {
        return Err(AppError::not_found(format!("User {id} not found")));
    }

    let result = repository::user::delete(state.get_pool(), id).await?;
    Ok(Json(result))
}
