//! Menu Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{MenuCategory, MenuCategoryCreate, MenuCategoryUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult, validation};

/// GET /api/menu/categories - 获取所有分类
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<MenuCategory>>> {
    let tenant_id = user.require_tenant()?;
    let categories = repository::menu_category::list(state.get_pool(), tenant_id).await?;
    Ok(Json(categories))
}

/// GET /api/menu/categories/{id} - 获取单个分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuCategory>> {
    let tenant_id = user.require_tenant()?;
    let category = repository::menu_category::get(state.get_pool(), tenant_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))?;
    Ok(Json(category))
}

/// POST /api/menu/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<MenuCategoryCreate>,
) -> AppResult<Json<MenuCategory>> {
    let tenant_id = user.require_tenant()?;
    validation::validate_required_text(&payload.name, "name", validation::MAX_NAME_LEN)?;
    let category = repository::menu_category::create(state.get_pool(), tenant_id, payload).await?;
    Ok(Json(category))
}

/// PUT /api/menu/categories/{id} - 更新分类
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<MenuCategoryUpdate>,
) -> AppResult<Json<MenuCategory>> {
    let tenant_id = user.require_tenant()?;
    validation::validate_optional_text(&payload.name, "name", validation::MAX_NAME_LEN)?;
    let category =
        repository::menu_category::update(state.get_pool(), tenant_id, id, payload).await?;
    Ok(Json(category))
}

/// DELETE /api/menu/categories/{id} - 删除分类 (仍有菜单项时返回 400)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let tenant_id = user.require_tenant()?;
    let result = repository::menu_category::delete(state.get_pool(), tenant_id, id).await?;
    Ok(Json(result))
}
