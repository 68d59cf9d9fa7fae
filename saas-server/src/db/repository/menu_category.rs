//! Menu Category Repository

use sqlx::SqlitePool;

use shared::models::{MenuCategory, MenuCategoryCreate, MenuCategoryUpdate};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

const COLUMNS: &str = "id, tenant_id, name, sort_order, is_active, created_at, updated_at";

/// List all categories ordered by sort_order (back office view,
/// deactivated ones included)
pub async fn list(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<MenuCategory>> {
    let categories = sqlx::query_as::<_, MenuCategory>(&format!(
        "SELECT {COLUMNS} FROM menu_categories WHERE tenant_id = ? ORDER BY sort_order, name"
    ))
    .bind(tenant_id)
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

/// List active categories only (storefront view)
pub async fn list_active(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<MenuCategory>> {
    let categories = sqlx::query_as::<_, MenuCategory>(&format!(
        "SELECT {COLUMNS} FROM menu_categories WHERE tenant_id = ? AND is_active = 1 ORDER BY sort_order, name"
    ))
    .bind(tenant_id)
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn get(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<Option<MenuCategory>> {
    let category = sqlx::query_as::<_, MenuCategory>(&format!(
        "SELECT {COLUMNS} FROM menu_categories WHERE tenant_id = ? AND id = ?"
    ))
    .bind(tenant_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

async fn get_by_name(
    pool: &SqlitePool,
    tenant_id: i64,
    name: &str,
) -> RepoResult<Option<MenuCategory>> {
    let category = sqlx::query_as::<_, MenuCategory>(&format!(
        "SELECT {COLUMNS} FROM menu_categories WHERE tenant_id = ? AND name = ?"
    ))
    .bind(tenant_id)
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

pub async fn create(
    pool: &SqlitePool,
    tenant_id: i64,
    data: MenuCategoryCreate,
) -> RepoResult<MenuCategory> {
    // Check duplicate name
    if get_by_name(pool, tenant_id, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Category '{}' already exists",
            data.name
        )));
    }

    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO menu_categories (id, tenant_id, name, sort_order, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(&data.name)
    .bind(data.sort_order.unwrap_or(0))
    .bind(now)
    .execute(pool)
    .await?;

    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}

pub async fn update(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    data: MenuCategoryUpdate,
) -> RepoResult<MenuCategory> {
    let existing = get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))?;

    // Check duplicate name if changing
    if let Some(ref new_name) = data.name
        && new_name != &existing.name
        && get_by_name(pool, tenant_id, new_name).await?.is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Category '{new_name}' already exists"
        )));
    }

    sqlx::query(
        "UPDATE menu_categories SET name = COALESCE(?1, name), sort_order = COALESCE(?2, sort_order), is_active = COALESCE(?3, is_active), updated_at = ?4 WHERE tenant_id = ?5 AND id = ?6",
    )
    .bind(&data.name)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(now_millis())
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))
}

/// Delete a category. Refused while menu items still reference it.
pub async fn delete(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<bool> {
    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))?;

    let item_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM menu_items WHERE category_id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
    if item_count > 0 {
        return Err(RepoError::Validation(
            "Cannot delete category with existing menu items".into(),
        ));
    }

    sqlx::query("DELETE FROM menu_categories WHERE tenant_id = ? AND id = ?")
        .bind(tenant_id)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(true)
}
