//! Storefront API Handlers
//!
//! 未知 slug 或停用租户返回 404；店面关闭返回 403。

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use shared::models::{
    CompanySettings, MenuCategory, MenuItem, OrderCreate, OrderDetail, OrderType, Tenant,
};

use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult, validation};

/// Public storefront profile
#[derive(Serialize)]
pub struct StorefrontInfo {
    pub slug: String,
    pub name: String,
    pub display_name: String,
    pub logo_url: Option<String>,
    pub theme_color: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub currency: String,
    pub tax_rate: f64,
    pub delivery_fee: f64,
}

#[derive(Serialize)]
pub struct StorefrontCategory {
    #[serde(flatten)]
    pub category: MenuCategory,
    pub items: Vec<MenuItem>,
}

/// Resolve a storefront by slug: tenant must exist, be active, and have
/// the storefront enabled.
async fn resolve_storefront(
    state: &ServerState,
    slug: &str,
) -> Result<(Tenant, CompanySettings), AppError> {
    let tenant = repository::tenant::get_by_slug(state.get_pool(), slug)
        .await?
        .filter(|t| t.is_active)
        .ok_or_else(|| AppError::not_found(format!("Storefront '{slug}' not found")))?;

    let settings = repository::company_settings::get_or_create(state.get_pool(), tenant.id).await?;
    if !settings.is_storefront_enabled {
        return Err(AppError::forbidden("This storefront is not accepting online visitors"));
    }

    Ok((tenant, settings))
}

/// GET /api/storefront/{slug}/info - 店面公开信息
pub async fn info(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<StorefrontInfo>> {
    let (tenant, settings) = resolve_storefront(&state, &slug).await?;
    Ok(Json(StorefrontInfo {
        slug: tenant.slug,
        name: tenant.name,
        display_name: settings.display_name,
        logo_url: settings.logo_url,
        theme_color: settings.theme_color,
        address: settings.address,
        phone: settings.phone,
        email: settings.email,
        currency: settings.currency,
        tax_rate: settings.tax_rate,
        delivery_fee: settings.delivery_fee,
    }))
}

/// GET /api/storefront/{slug}/menu - 公开菜单 (仅在售项、活跃分类)
pub async fn menu(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Vec<StorefrontCategory>>> {
    let (tenant, _) = resolve_storefront(&state, &slug).await?;

    let categories = repository::menu_category::list_active(state.get_pool(), tenant.id).await?;
    let items = repository::menu_item::list_available(state.get_pool(), tenant.id).await?;

    let menu = categories
        .into_iter()
        .map(|category| {
            let items = items
                .iter()
                .filter(|i| i.category_id == category.id)
                .cloned()
                .collect();
            StorefrontCategory { category, items }
        })
        .collect();

    Ok(Json(menu))
}

/// POST /api/storefront/{slug}/orders - 在线下单 (pickup/delivery)
pub async fn place_order(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
    Json(mut payload): Json<OrderCreate>,
) -> AppResult<Json<OrderDetail>> {
    let (tenant, _) = resolve_storefront(&state, &slug).await?;

    if payload.order_type == OrderType::DineIn {
        return Err(AppError::validation(
            "Online orders must be pickup or delivery",
        ));
    }
    if payload
        .customer_name
        .as_deref()
        .is_none_or(|n| n.trim().is_empty())
    {
        return Err(AppError::validation("customer_name is required"));
    }
    if payload
        .customer_phone
        .as_deref()
        .is_none_or(|p| p.trim().is_empty())
    {
        return Err(AppError::validation("customer_phone is required"));
    }
    validation::validate_optional_text(&payload.note, "note", validation::MAX_NOTE_LEN)?;

    // Public callers never reference back-office records
    payload.customer_id = None;
    payload.table_id = None;

    let detail = repository::order::create(state.get_pool(), tenant.id, payload).await?;
    Ok(Json(detail))
}
