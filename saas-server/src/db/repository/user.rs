//! User Repository

use sqlx::SqlitePool;

use shared::models::{User, UserCreate, UserRole, UserUpdate};
use shared::util::{now_millis, snowflake_id};

use crate::auth::password;

use super::{RepoError, RepoResult};

const COLUMNS: &str =
    "id, tenant_id, username, display_name, email, password_hash, role, is_active, created_at, updated_at";

/// List users belonging to a tenant
pub async fn list_by_tenant(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM users WHERE tenant_id = ? ORDER BY username"
    ))
    .bind(tenant_id)
    .fetch_all(pool)
    .await?;
    Ok(users)
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn get_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let user =
        sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE username = ?"))
            .bind(username)
            .fetch_optional(pool)
            .await?;
    Ok(user)
}

/// Create a user. `tenant_id` is None only for platform administrators.
pub async fn create(
    pool: &SqlitePool,
    tenant_id: Option<i64>,
    data: UserCreate,
) -> RepoResult<User> {
    if get_by_username(pool, &data.username).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Username '{}' already exists",
            data.username
        )));
    }

    let role = data.role.unwrap_or(UserRole::Staff);
    if role == UserRole::Platform && tenant_id.is_some() {
        return Err(RepoError::Validation(
            "Platform administrators cannot belong to a tenant".into(),
        ));
    }

    let password_hash = password::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;

    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO users (id, tenant_id, username, display_name, email, password_hash, role, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1, ?8, ?8)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(&data.username)
    .bind(data.display_name.as_deref().unwrap_or(&data.username))
    .bind(&data.email)
    .bind(&password_hash)
    .bind(role)
    .bind(now)
    .execute(pool)
    .await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: UserUpdate) -> RepoResult<User> {
    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))?;

    let password_hash = match &data.password {
        Some(p) => Some(
            password::hash_password(p)
                .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?,
        ),
        None => None,
    };

    sqlx::query(
        "UPDATE users SET display_name = COALESCE(?1, display_name), email = COALESCE(?2, email), password_hash = COALESCE(?3, password_hash), role = COALESCE(?4, role), is_active = COALESCE(?5, is_active), updated_at = ?6 WHERE id = ?7",
    )
    .bind(&data.display_name)
    .bind(&data.email)
    .bind(&password_hash)
    .bind(data.role)
    .bind(data.is_active)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    Ok(true)
}
