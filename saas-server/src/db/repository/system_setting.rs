//! System Settings Repository (tenant-scoped key/value)

use sqlx::SqlitePool;

use shared::models::SystemSetting;
use shared::util::now_millis;

use super::{RepoError, RepoResult};

pub async fn list(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<SystemSetting>> {
    let settings = sqlx::query_as::<_, SystemSetting>(
        "SELECT tenant_id, key, value, updated_at FROM system_settings WHERE tenant_id = ? ORDER BY key",
    )
    .bind(tenant_id)
    .fetch_all(pool)
    .await?;
    Ok(settings)
}

pub async fn get(pool: &SqlitePool, tenant_id: i64, key: &str) -> RepoResult<Option<SystemSetting>> {
    let setting = sqlx::query_as::<_, SystemSetting>(
        "SELECT tenant_id, key, value, updated_at FROM system_settings WHERE tenant_id = ? AND key = ?",
    )
    .bind(tenant_id)
    .bind(key)
    .fetch_optional(pool)
    .await?;
    Ok(setting)
}

/// Upsert a setting value
pub async fn set(
    pool: &SqlitePool,
    tenant_id: i64,
    key: &str,
    value: &str,
) -> RepoResult<SystemSetting> {
    sqlx::query(
        "INSERT INTO system_settings (tenant_id, key, value, updated_at) VALUES (?1, ?2, ?3, ?4) ON CONFLICT(tenant_id, key) DO UPDATE SET value = ?3, updated_at = ?4",
    )
    .bind(tenant_id)
    .bind(key)
    .bind(value)
    .bind(now_millis())
    .execute(pool)
    .await?;

    get(pool, tenant_id, key)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to read setting after upsert".into()))
}

pub async fn remove(pool: &SqlitePool, tenant_id: i64, key: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM system_settings WHERE tenant_id = ? AND key = ?")
        .bind(tenant_id)
        .bind(key)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Setting '{key}' not found")));
    }
    Ok(true)
}
