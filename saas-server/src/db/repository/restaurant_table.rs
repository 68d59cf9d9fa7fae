//! Restaurant Table Repository

use sqlx::SqlitePool;

use shared::models::{RestaurantTable, RestaurantTableCreate, RestaurantTableUpdate};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

const COLUMNS: &str = "id, tenant_id, name, capacity, location, is_active, created_at, updated_at";

pub async fn list(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<RestaurantTable>> {
    let tables = sqlx::query_as::<_, RestaurantTable>(&format!(
        "SELECT {COLUMNS} FROM restaurant_tables WHERE tenant_id = ? ORDER BY name"
    ))
    .bind(tenant_id)
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

pub async fn get(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<Option<RestaurantTable>> {
    let table = sqlx::query_as::<_, RestaurantTable>(&format!(
        "SELECT {COLUMNS} FROM restaurant_tables WHERE tenant_id = ? AND id = ?"
    ))
    .bind(tenant_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

async fn get_by_name(
    pool: &SqlitePool,
    tenant_id: i64,
    name: &str,
) -> RepoResult<Option<RestaurantTable>> {
    let table = sqlx::query_as::<_, RestaurantTable>(&format!(
        "SELECT {COLUMNS} FROM restaurant_tables WHERE tenant_id = ? AND name = ?"
    ))
    .bind(tenant_id)
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

pub async fn create(
    pool: &SqlitePool,
    tenant_id: i64,
    data: RestaurantTableCreate,
) -> RepoResult<RestaurantTable> {
    if get_by_name(pool, tenant_id, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Table '{}' already exists",
            data.name
        )));
    }
    let capacity = data.capacity.unwrap_or(4);
    if capacity < 1 {
        return Err(RepoError::Validation("capacity must be at least 1".into()));
    }

    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO restaurant_tables (id, tenant_id, name, capacity, location, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?6)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(&data.name)
    .bind(capacity)
    .bind(&data.location)
    .bind(now)
    .execute(pool)
    .await?;

    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create table".into()))
}

pub async fn update(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    data: RestaurantTableUpdate,
) -> RepoResult<RestaurantTable> {
    let existing = get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {id} not found")))?;

    if let Some(ref new_name) = data.name
        && new_name != &existing.name
        && get_by_name(pool, tenant_id, new_name).await?.is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Table '{new_name}' already exists"
        )));
    }
    if let Some(capacity) = data.capacity
        && capacity < 1
    {
        return Err(RepoError::Validation("capacity must be at least 1".into()));
    }

    sqlx::query(
        "UPDATE restaurant_tables SET name = COALESCE(?1, name), capacity = COALESCE(?2, capacity), location = COALESCE(?3, location), is_active = COALESCE(?4, is_active), updated_at = ?5 WHERE tenant_id = ?6 AND id = ?7",
    )
    .bind(&data.name)
    .bind(data.capacity)
    .bind(&data.location)
    .bind(data.is_active)
    .bind(now_millis())
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {id} not found")))
}

/// Delete a table. Refused while non-cancelled reservations reference it.
pub async fn delete(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<bool> {
    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {id} not found")))?;

    let reservation_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM table_reservations WHERE table_id = ? AND status != 'cancelled'",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    if reservation_count > 0 {
        return Err(RepoError::Validation(
            "Cannot delete table with active reservations".into(),
        ));
    }

    // Cancelled reservation rows still reference the table; remove them
    // first so the FK lets the table row go.
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM table_reservations WHERE table_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM restaurant_tables WHERE tenant_id = ? AND id = ?")
        .bind(tenant_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(true)
}
