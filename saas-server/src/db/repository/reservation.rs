//! Table Reservation Repository

use sqlx::SqlitePool;

use shared::models::{ReservationCreate, ReservationStatus, ReservationUpdate, TableReservation};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

const COLUMNS: &str = "id, tenant_id, table_id, customer_name, customer_phone, party_size, reserved_at, status, note, created_at, updated_at";

/// List all reservations for a tenant, upcoming first
pub async fn list(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<TableReservation>> {
    let reservations = sqlx::query_as::<_, TableReservation>(&format!(
        "SELECT {COLUMNS} FROM table_reservations WHERE tenant_id = ? ORDER BY reserved_at"
    ))
    .bind(tenant_id)
    .fetch_all(pool)
    .await?;
    Ok(reservations)
}

/// List reservations for a single table
pub async fn list_by_table(
    pool: &SqlitePool,
    tenant_id: i64,
    table_id: i64,
) -> RepoResult<Vec<TableReservation>> {
    let reservations = sqlx::query_as::<_, TableReservation>(&format!(
        "SELECT {COLUMNS} FROM table_reservations WHERE tenant_id = ? AND table_id = ? ORDER BY reserved_at"
    ))
    .bind(tenant_id)
    .bind(table_id)
    .fetch_all(pool)
    .await?;
    Ok(reservations)
}

pub async fn get(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
) -> RepoResult<Option<TableReservation>> {
    let reservation = sqlx::query_as::<_, TableReservation>(&format!(
        "SELECT {COLUMNS} FROM table_reservations WHERE tenant_id = ? AND id = ?"
    ))
    .bind(tenant_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(reservation)
}

pub async fn create(
    pool: &SqlitePool,
    tenant_id: i64,
    table_id: i64,
    data: ReservationCreate,
) -> RepoResult<TableReservation> {
    let table = super::restaurant_table::get(pool, tenant_id, table_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {table_id} not found")))?;

    if data.customer_name.trim().is_empty() {
        return Err(RepoError::Validation("customer_name is required".into()));
    }
    let party_size = data.party_size.unwrap_or(2);
    if party_size < 1 {
        return Err(RepoError::Validation("party_size must be at least 1".into()));
    }
    if party_size > table.capacity {
        return Err(RepoError::Validation(format!(
            "Party size {party_size} exceeds table capacity {}",
            table.capacity
        )));
    }

    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO table_reservations (id, tenant_id, table_id, customer_name, customer_phone, party_size, reserved_at, status, note, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 'booked', ?8, ?9, ?9)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(table_id)
    .bind(data.customer_name.trim())
    .bind(&data.customer_phone)
    .bind(party_size)
    .bind(data.reserved_at)
    .bind(&data.note)
    .bind(now)
    .execute(pool)
    .await?;

    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create reservation".into()))
}

pub async fn update(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    data: ReservationUpdate,
) -> RepoResult<TableReservation> {
    let existing = get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))?;

    // Completed/cancelled reservations accept no further changes
    if matches!(
        existing.status,
        ReservationStatus::Completed | ReservationStatus::Cancelled
    ) {
        return Err(RepoError::Validation(format!(
            "Reservation is already {:?}",
            existing.status
        )));
    }

    if let Some(party_size) = data.party_size {
        if party_size < 1 {
            return Err(RepoError::Validation("party_size must be at least 1".into()));
        }
        let table = super::restaurant_table::get(pool, tenant_id, existing.table_id)
            .await?
            .ok_or_else(|| {
                RepoError::NotFound(format!("Table {} not found", existing.table_id))
            })?;
        if party_size > table.capacity {
            return Err(RepoError::Validation(format!(
                "Party size {party_size} exceeds table capacity {}",
                table.capacity
            )));
        }
    }

    sqlx::query(
        "UPDATE table_reservations SET customer_name = COALESCE(?1, customer_name), customer_phone = COALESCE(?2, customer_phone), party_size = COALESCE(?3, party_size), reserved_at = COALESCE(?4, reserved_at), status = COALESCE(?5, status), note = COALESCE(?6, note), updated_at = ?7 WHERE tenant_id = ?8 AND id = ?9",
    )
    .bind(&data.customer_name)
    .bind(&data.customer_phone)
    .bind(data.party_size)
    .bind(data.reserved_at)
    .bind(data.status)
    .bind(&data.note)
    .bind(now_millis())
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
}

/// Cancel a reservation (soft delete)
pub async fn cancel(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<TableReservation> {
    let existing = get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))?;

    if existing.status == ReservationStatus::Cancelled {
        return Ok(existing);
    }

    sqlx::query(
        "UPDATE table_reservations SET status = 'cancelled', updated_at = ? WHERE tenant_id = ? AND id = ?",
    )
    .bind(now_millis())
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
}
