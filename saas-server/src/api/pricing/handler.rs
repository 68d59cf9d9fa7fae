//! Pricing API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{PricingPackage, PricingPackageCreate, PricingPackageUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult, validation};

/// GET /api/pricing/packages - 公开的在售套餐列表
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<PricingPackage>>> {
    let packages = repository::pricing_package::list(state.get_pool(), true).await?;
    Ok(Json(packages))
}

/// GET /api/pricing/admin/packages - 全部套餐 (含下架)
pub async fn admin_list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<PricingPackage>>> {
    user.require_platform()?;
    let packages = repository::pricing_package::list(state.get_pool(), false).await?;
    Ok(Json(packages))
}

/// GET /api/pricing/admin/packages/{id}
pub async fn admin_get(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<PricingPackage>> {
    user.require_platform()?;
    let package = repository::pricing_package::get(state.get_pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Pricing package {id} not found")))?;
    Ok(Json(package))
}

/// POST /api/pricing/admin/packages - 创建套餐
pub async fn admin_create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PricingPackageCreate>,
) -> AppResult<Json<PricingPackage>> {
    user.require_platform()?;
    validation::validate_required_text(&payload.name, "name", validation::MAX_NAME_LEN)?;
    validation::validate_money(payload.monthly_price, "monthly_price")?;
    let package = repository::pricing_package::create(state.get_pool(), payload).await?;
    Ok(Json(package))
}

/// PUT /api/pricing/admin/packages/{id} - 更新套餐
pub async fn admin_update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<PricingPackageUpdate>,
) -> AppResult<Json<PricingPackage>> {
    user.require_platform()?;
    validation::validate_optional_text(&payload.name, "name", validation::MAX_NAME_LEN)?;
    if let Some(price) = payload.monthly_price {
        validation::validate_money(price, "monthly_price")?;
    }
    let package = repository::pricing_package::update(state.get_pool(), id, payload).await?;
    Ok(Json(package))
}

/// DELETE /api/pricing/admin/packages/{id} - 删除套餐
pub async fn admin_delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    user.require_platform()?;
    let result = repository::pricing_package::delete(state.get_pool(), id).await?;
    Ok(Json(result))
}
