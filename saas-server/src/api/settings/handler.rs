//! Settings API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{
    CompanySettings, CompanySettingsUpdate, SystemSetting, SystemSettingUpdate,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult};

const MAX_SETTING_KEY_LEN: usize = 100;
const MAX_SETTING_VALUE_LEN: usize = 10_000;

/// GET /api/settings/company - 获取公司设置
pub async fn get_company(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<CompanySettings>> {
    let tenant_id = user.require_tenant()?;
    let settings = repository::company_settings::get_or_create(state.get_pool(), tenant_id).await?;
    Ok(Json(settings))
}

/// PUT /api/settings/company - 更新公司设置
pub async fn update_company(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CompanySettingsUpdate>,
) -> AppResult<Json<CompanySettings>> {
    let tenant_id = user.require_tenant()?;
    let settings = repository::company_settings::update(state.get_pool(), tenant_id, payload).await?;
    Ok(Json(settings))
}

/// GET /api/settings/system - 获取所有系统设置
pub async fn list_system(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<SystemSetting>>> {
    let tenant_id = user.require_tenant()?;
    let settings = repository::system_setting::list(state.get_pool(), tenant_id).await?;
    Ok(Json(settings))
}

/// GET /api/settings/system/{key} - 获取单个系统设置
pub async fn get_system(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(key): Path<String>,
) -> AppResult<Json<SystemSetting>> {
    let tenant_id = user.require_tenant()?;
    let setting = repository::system_setting::get(state.get_pool(), tenant_id, &key)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Setting '{key}' not found")))?;
    Ok(Json(setting))
}

/// PUT /api/settings/system/{key} - 写入系统设置 (upsert)
pub async fn set_system(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(key): Path<String>,
    Json(payload): Json<SystemSettingUpdate>,
) -> AppResult<Json<SystemSetting>> {
    let tenant_id = user.require_tenant()?;
    if key.trim().is_empty() || key.len() > MAX_SETTING_KEY_LEN {
        return Err(AppError::validation(format!(
            "key must be 1-{MAX_SETTING_KEY_LEN} characters"
        )));
    }
    if payload.value.len() > MAX_SETTING_VALUE_LEN {
        return Err(AppError::validation(format!(
            "value cannot exceed {MAX_SETTING_VALUE_LEN} characters"
        )));
    }
    let setting =
        repository::system_setting::set(state.get_pool(), tenant_id, &key, &payload.value).await?;
    Ok(Json(setting))
}

/// DELETE /api/settings/system/{key} - 删除系统设置
pub async fn delete_system(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(key): Path<String>,
) -> AppResult<Json<bool>> {
    let tenant_id = user.require_tenant()?;
    let result = repository::system_setting::remove(state.get_pool(), tenant_id, &key).await?;
    Ok(Json(result))
}
