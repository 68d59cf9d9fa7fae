//! Customer Repository

use sqlx::SqlitePool;

use shared::models::{Customer, CustomerCreate, CustomerUpdate};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

const COLUMNS: &str = "id, tenant_id, name, phone, email, address, note, created_at, updated_at";

/// List customers, optionally filtered by a name/phone search term
pub async fn list(
    pool: &SqlitePool,
    tenant_id: i64,
    search: Option<&str>,
) -> RepoResult<Vec<Customer>> {
    let customers = match search {
        Some(term) if !term.trim().is_empty() => {
            let pattern = format!("%{}%", term.trim());
            sqlx::query_as::<_, Customer>(&format!(
                "SELECT {COLUMNS} FROM customers WHERE tenant_id = ? AND (name LIKE ? OR phone LIKE ?) ORDER BY name"
            ))
            .bind(tenant_id)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(pool)
            .await?
        }
        _ => {
            sqlx::query_as::<_, Customer>(&format!(
                "SELECT {COLUMNS} FROM customers WHERE tenant_id = ? ORDER BY name"
            ))
            .bind(tenant_id)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(customers)
}

pub async fn get(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<Option<Customer>> {
    let customer = sqlx::query_as::<_, Customer>(&format!(
        "SELECT {COLUMNS} FROM customers WHERE tenant_id = ? AND id = ?"
    ))
    .bind(tenant_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(customer)
}

pub async fn create(pool: &SqlitePool, tenant_id: i64, data: CustomerCreate) -> RepoResult<Customer> {
    if data.name.trim().is_empty() {
        return Err(RepoError::Validation("name is required".into()));
    }

    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO customers (id, tenant_id, name, phone, email, address, note, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(data.name.trim())
    .bind(&data.phone)
    .bind(&data.email)
    .bind(&data.address)
    .bind(&data.note)
    .bind(now)
    .execute(pool)
    .await?;

    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create customer".into()))
}

pub async fn update(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    data: CustomerUpdate,
) -> RepoResult<Customer> {
    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Customer {id} not found")))?;

    if let Some(ref name) = data.name
        && name.trim().is_empty()
    {
        return Err(RepoError::Validation("name cannot be empty".into()));
    }

    sqlx::query(
        "UPDATE customers SET name = COALESCE(?1, name), phone = COALESCE(?2, phone), email = COALESCE(?3, email), address = COALESCE(?4, address), note = COALESCE(?5, note), updated_at = ?6 WHERE tenant_id = ?7 AND id = ?8",
    )
    .bind(&data.name)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(&data.address)
    .bind(&data.note)
    .bind(now_millis())
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Customer {id} not found")))
}

/// Delete a customer. Past orders keep their row (customer_id set NULL by FK).
pub async fn delete(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM customers WHERE tenant_id = ? AND id = ?")
        .bind(tenant_id)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Customer {id} not found")));
    }
    Ok(true)
}
