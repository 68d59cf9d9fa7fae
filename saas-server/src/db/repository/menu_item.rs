//! Menu Item Repository

use sqlx::SqlitePool;

use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

const COLUMNS: &str = "id, tenant_id, category_id, name, description, price, image_url, is_available, sort_order, created_at, updated_at";

/// List items, optionally filtered by category
pub async fn list(
    pool: &SqlitePool,
    tenant_id: i64,
    category_id: Option<i64>,
) -> RepoResult<Vec<MenuItem>> {
    let items = match category_id {
        Some(cat) => {
            sqlx::query_as::<_, MenuItem>(&format!(
                "SELECT {COLUMNS} FROM menu_items WHERE tenant_id = ? AND category_id = ? ORDER BY sort_order, name"
            ))
            .bind(tenant_id)
            .bind(cat)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, MenuItem>(&format!(
                "SELECT {COLUMNS} FROM menu_items WHERE tenant_id = ? ORDER BY sort_order, name"
            ))
            .bind(tenant_id)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(items)
}

/// List available items in active categories (storefront view)
pub async fn list_available(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT i.{} FROM menu_items i JOIN menu_categories c ON c.id = i.category_id WHERE i.tenant_id = ? AND i.is_available = 1 AND c.is_active = 1 ORDER BY i.sort_order, i.name",
        COLUMNS.replace(", ", ", i.")
    ))
    .bind(tenant_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn get(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_items WHERE tenant_id = ? AND id = ?"
    ))
    .bind(tenant_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, tenant_id: i64, data: MenuItemCreate) -> RepoResult<MenuItem> {
    // Category must exist and belong to the same tenant
    super::menu_category::get(pool, tenant_id, data.category_id)
        .await?
        .ok_or_else(|| {
            RepoError::Validation(format!("Category {} does not exist", data.category_id))
        })?;

    if !data.price.is_finite() || data.price < 0.0 {
        return Err(RepoError::Validation("price must be non-negative".into()));
    }

    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO menu_items (id, tenant_id, category_id, name, description, price, image_url, is_available, sort_order, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(data.category_id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(&data.image_url)
    .bind(data.is_available.unwrap_or(true))
    .bind(data.sort_order.unwrap_or(0))
    .bind(now)
    .execute(pool)
    .await?;

    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

pub async fn update(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    data: MenuItemUpdate,
) -> RepoResult<MenuItem> {
    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))?;

    if let Some(cat) = data.category_id {
        super::menu_category::get(pool, tenant_id, cat)
            .await?
            .ok_or_else(|| RepoError::Validation(format!("Category {cat} does not exist")))?;
    }
    if let Some(price) = data.price
        && (!price.is_finite() || price < 0.0)
    {
        return Err(RepoError::Validation("price must be non-negative".into()));
    }

    sqlx::query(
        "UPDATE menu_items SET category_id = COALESCE(?1, category_id), name = COALESCE(?2, name), description = COALESCE(?3, description), price = COALESCE(?4, price), image_url = COALESCE(?5, image_url), is_available = COALESCE(?6, is_available), sort_order = COALESCE(?7, sort_order), updated_at = ?8 WHERE tenant_id = ?9 AND id = ?10",
    )
    .bind(data.category_id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(&data.image_url)
    .bind(data.is_available)
    .bind(data.sort_order)
    .bind(now_millis())
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}

/// Hard delete a menu item. Past order items keep their snapshot
/// (menu_item_id is set NULL by the FK).
pub async fn delete(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu_items WHERE tenant_id = ? AND id = ?")
        .bind(tenant_id)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    Ok(true)
}
