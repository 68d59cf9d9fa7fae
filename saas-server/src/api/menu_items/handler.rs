//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult, validation};

#[derive(Deserialize)]
pub struct MenuItemListQuery {
    pub category_id: Option<i64>,
}

/// GET /api/menu/items?category_id= - 获取菜单项列表
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<MenuItemListQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let tenant_id = user.require_tenant()?;
    let items = repository::menu_item::list(state.get_pool(), tenant_id, query.category_id).await?;
    Ok(Json(items))
}

/// GET /api/menu/items/{id} - 获取单个菜单项
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let tenant_id = user.require_tenant()?;
    let item = repository::menu_item::get(state.get_pool(), tenant_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {id} not found")))?;
    Ok(Json(item))
}

/// POST /api/menu/items - 创建菜单项
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    let tenant_id = user.require_tenant()?;
    validation::validate_required_text(&payload.name, "name", validation::MAX_NAME_LEN)?;
    validation::validate_optional_text(&payload.description, "description", validation::MAX_NOTE_LEN)?;
    validation::validate_money(payload.price, "price")?;
    let item = repository::menu_item::create(state.get_pool(), tenant_id, payload).await?;
    Ok(Json(item))
}

/// PUT /api/menu/items/{id} - 更新菜单项
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    let tenant_id = user.require_tenant()?;
    validation::validate_optional_text(&payload.name, "name", validation::MAX_NAME_LEN)?;
    validation::validate_optional_text(&payload.description, "description", validation::MAX_NOTE_LEN)?;
    if let Some(price) = payload.price {
        validation::validate_money(price, "price")?;
    }
    let item = repository::menu_item::update(state.get_pool(), tenant_id, id, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/menu/items/{id} - 删除菜单项
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let tenant_id = user.require_tenant()?;
    let result = repository::menu_item::delete(state.get_pool(), tenant_id, id).await?;
    Ok(Json(result))
}
