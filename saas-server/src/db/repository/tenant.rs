//! Tenant Repository

use sqlx::SqlitePool;

use shared::models::{Tenant, TenantCreate, TenantUpdate};
use shared::util::{now_millis, slugify, snowflake_id};

use super::{RepoError, RepoResult};

const COLUMNS: &str = "id, slug, name, is_active, created_at, updated_at";

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<Tenant>> {
    let tenants = sqlx::query_as::<_, Tenant>(&format!(
        "SELECT {COLUMNS} FROM tenants ORDER BY created_at"
    ))
    .fetch_all(pool)
    .await?;
    Ok(tenants)
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Option<Tenant>> {
    let tenant =
        sqlx::query_as::<_, Tenant>(&format!("SELECT {COLUMNS} FROM tenants WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(tenant)
}

pub async fn get_by_slug(pool: &SqlitePool, slug: &str) -> RepoResult<Option<Tenant>> {
    let tenant =
        sqlx::query_as::<_, Tenant>(&format!("SELECT {COLUMNS} FROM tenants WHERE slug = ?"))
            .bind(slug)
            .fetch_optional(pool)
            .await?;
    Ok(tenant)
}

pub async fn create(pool: &SqlitePool, data: TenantCreate) -> RepoResult<Tenant> {
    let slug = match data.slug {
        Some(s) => slugify(&s),
        None => slugify(&data.name),
    };
    if slug.is_empty() {
        return Err(RepoError::Validation(
            "Tenant slug must contain at least one alphanumeric character".into(),
        ));
    }
    if get_by_slug(pool, &slug).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Tenant slug '{slug}' already exists"
        )));
    }

    let id = snowflake_id();
    let now = now_millis();

    // Tenant row, settings row, and order counter land together or not at all
    let mut tx = pool.begin().await?;
    sqlx::query(
        "INSERT INTO tenants (id, slug, name, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, 1, ?4, ?4)",
    )
    .bind(id)
    .bind(&slug)
    .bind(&data.name)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO company_settings (tenant_id, display_name, updated_at) VALUES (?1, ?2, ?3)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO order_counters (tenant_id, next_number) VALUES (?, 1)")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create tenant".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: TenantUpdate) -> RepoResult<Tenant> {
    let existing = get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Tenant {id} not found")))?;

    let slug = match &data.slug {
        Some(s) => {
            let slug = slugify(s);
            if slug != existing.slug && get_by_slug(pool, &slug).await?.is_some() {
                return Err(RepoError::Duplicate(format!(
                    "Tenant slug '{slug}' already exists"
                )));
            }
            Some(slug)
        }
        None => None,
    };

    sqlx::query(
        "UPDATE tenants SET name = COALESCE(?1, name), slug = COALESCE(?2, slug), is_active = COALESCE(?3, is_active), updated_at = ?4 WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(&slug)
    .bind(data.is_active)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Tenant {id} not found")))
}

/// Delete a tenant. Refused while the tenant still owns orders or users.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Tenant {id} not found")))?;

    let order_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE tenant_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if order_count > 0 {
        return Err(RepoError::Validation(
            "Cannot delete tenant with existing orders".into(),
        ));
    }

    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE tenant_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if user_count > 0 {
        return Err(RepoError::Validation(
            "Cannot delete tenant with existing users".into(),
        ));
    }

    // Tenant-owned rows go first (menu, tables, settings, counters)
    for sql in [
        "DELETE FROM table_reservations WHERE tenant_id = ?",
        "DELETE FROM restaurant_tables WHERE tenant_id = ?",
        "DELETE FROM menu_items WHERE tenant_id = ?",
        "DELETE FROM menu_categories WHERE tenant_id = ?",
        "DELETE FROM customers WHERE tenant_id = ?",
        "DELETE FROM system_settings WHERE tenant_id = ?",
        "DELETE FROM company_settings WHERE tenant_id = ?",
        "DELETE FROM order_counters WHERE tenant_id = ?",
        "DELETE FROM tenants WHERE id = ?",
    ] {
        sqlx::query(sql).bind(id).execute(pool).await?;
    }

    Ok(true)
}
