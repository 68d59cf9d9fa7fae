//! Company Settings Repository (singleton row per tenant)

use sqlx::SqlitePool;

use shared::models::{CompanySettings, CompanySettingsUpdate};
use shared::util::now_millis;

use super::{RepoError, RepoResult};

const COLUMNS: &str = "tenant_id, display_name, logo_url, theme_color, address, phone, email, currency, tax_rate, delivery_fee, is_storefront_enabled, updated_at";

pub async fn get(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Option<CompanySettings>> {
    let settings = sqlx::query_as::<_, CompanySettings>(&format!(
        "SELECT {COLUMNS} FROM company_settings WHERE tenant_id = ?"
    ))
    .bind(tenant_id)
    .fetch_optional(pool)
    .await?;
    Ok(settings)
}

/// Get the settings row, creating the default one if the tenant predates it
pub async fn get_or_create(pool: &SqlitePool, tenant_id: i64) -> RepoResult<CompanySettings> {
    if let Some(settings) = get(pool, tenant_id).await? {
        return Ok(settings);
    }

    sqlx::query("INSERT INTO company_settings (tenant_id, display_name, updated_at) SELECT id, name, ? FROM tenants WHERE id = ?")
        .bind(now_millis())
        .bind(tenant_id)
        .execute(pool)
        .await?;

    get(pool, tenant_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Tenant {tenant_id} not found")))
}

pub async fn update(
    pool: &SqlitePool,
    tenant_id: i64,
    data: CompanySettingsUpdate,
) -> RepoResult<CompanySettings> {
    // Ensure singleton exists
    get_or_create(pool, tenant_id).await?;

    if let Some(rate) = data.tax_rate
        && !(0.0..=1.0).contains(&rate)
    {
        return Err(RepoError::Validation(
            "tax_rate must be a fraction between 0 and 1".into(),
        ));
    }
    if let Some(fee) = data.delivery_fee
        && (fee < 0.0 || !fee.is_finite())
    {
        return Err(RepoError::Validation(
            "delivery_fee must be non-negative".into(),
        ));
    }

    sqlx::query(
        "UPDATE company_settings SET display_name = COALESCE(?1, display_name), logo_url = COALESCE(?2, logo_url), theme_color = COALESCE(?3, theme_color), address = COALESCE(?4, address), phone = COALESCE(?5, phone), email = COALESCE(?6, email), currency = COALESCE(?7, currency), tax_rate = COALESCE(?8, tax_rate), delivery_fee = COALESCE(?9, delivery_fee), is_storefront_enabled = COALESCE(?10, is_storefront_enabled), updated_at = ?11 WHERE tenant_id = ?12",
    )
    .bind(&data.display_name)
    .bind(&data.logo_url)
    .bind(&data.theme_color)
    .bind(&data.address)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(&data.currency)
    .bind(data.tax_rate)
    .bind(data.delivery_fee)
    .bind(data.is_storefront_enabled)
    .bind(now_millis())
    .bind(tenant_id)
    .execute(pool)
    .await?;

    get(pool, tenant_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to read company settings after update".into()))
}
