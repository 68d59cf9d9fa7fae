//! Pricing Package Repository (platform-owned marketing content)
//!
//! `features` lives in a TEXT column as a JSON array, so rows are read
//! through a private row struct and mapped by hand.

use sqlx::SqlitePool;

use shared::models::{PricingPackage, PricingPackageCreate, PricingPackageUpdate};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

const COLUMNS: &str =
    "id, name, description, monthly_price, features, sort_order, is_active, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct PackageRow {
    id: i64,
    name: String,
    description: Option<String>,
    monthly_price: f64,
    features: String,
    sort_order: i64,
    is_active: bool,
    created_at: i64,
    updated_at: i64,
}

impl PackageRow {
    fn into_model(self) -> PricingPackage {
        let features: Vec<String> = serde_json::from_str(&self.features).unwrap_or_default();
        PricingPackage {
            id: self.id,
            name: self.name,
            description: self.description,
            monthly_price: self.monthly_price,
            features,
            sort_order: self.sort_order,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn encode_features(features: &[String]) -> RepoResult<String> {
    serde_json::to_string(features)
        .map_err(|e| RepoError::Database(format!("Failed to encode features: {e}")))
}

/// List packages. `active_only` hides retired plans (public listing).
pub async fn list(pool: &SqlitePool, active_only: bool) -> RepoResult<Vec<PricingPackage>> {
    let sql = if active_only {
        format!(
            "SELECT {COLUMNS} FROM pricing_packages WHERE is_active = 1 ORDER BY sort_order, name"
        )
    } else {
        format!("SELECT {COLUMNS} FROM pricing_packages ORDER BY sort_order, name")
    };
    let rows = sqlx::query_as::<_, PackageRow>(&sql).fetch_all(pool).await?;
    Ok(rows.into_iter().map(PackageRow::into_model).collect())
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Option<PricingPackage>> {
    let row = sqlx::query_as::<_, PackageRow>(&format!(
        "SELECT {COLUMNS} FROM pricing_packages WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(PackageRow::into_model))
}

pub async fn create(pool: &SqlitePool, data: PricingPackageCreate) -> RepoResult<PricingPackage> {
    if data.name.trim().is_empty() {
        return Err(RepoError::Validation("name is required".into()));
    }
    if !data.monthly_price.is_finite() || data.monthly_price < 0.0 {
        return Err(RepoError::Validation(
            "monthly_price must be non-negative".into(),
        ));
    }
    let existing: Option<i64> =
        sqlx::query_scalar("SELECT id FROM pricing_packages WHERE name = ?")
            .bind(data.name.trim())
            .fetch_optional(pool)
            .await?;
    if existing.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Package '{}' already exists",
            data.name.trim()
        )));
    }

    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO pricing_packages (id, name, description, monthly_price, features, sort_order, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
    )
    .bind(id)
    .bind(data.name.trim())
    .bind(&data.description)
    .bind(data.monthly_price)
    .bind(encode_features(&data.features)?)
    .bind(data.sort_order.unwrap_or(0))
    .bind(now)
    .execute(pool)
    .await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create pricing package".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: PricingPackageUpdate,
) -> RepoResult<PricingPackage> {
    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Pricing package {id} not found")))?;

    if let Some(price) = data.monthly_price
        && (!price.is_finite() || price < 0.0)
    {
        return Err(RepoError::Validation(
            "monthly_price must be non-negative".into(),
        ));
    }
    let features = match &data.features {
        Some(f) => Some(encode_features(f)?),
        None => None,
    };

    sqlx::query(
        "UPDATE pricing_packages SET name = COALESCE(?1, name), description = COALESCE(?2, description), monthly_price = COALESCE(?3, monthly_price), features = COALESCE(?4, features), sort_order = COALESCE(?5, sort_order), is_active = COALESCE(?6, is_active), updated_at = ?7 WHERE id = ?8",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.monthly_price)
    .bind(&features)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Pricing package {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM pricing_packages WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Pricing package {id} not found")));
    }
    Ok(true)
}
