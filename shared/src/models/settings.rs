//! Settings Models
//!
//! Per-tenant company settings (singleton row controlling storefront
//! appearance and order pricing) and free-form system settings (key/value).

use serde::{Deserialize, Serialize};

/// Company settings — one row per tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CompanySettings {
    pub tenant_id: i64,
    /// Name shown on the storefront (falls back to the tenant name)
    #[serde(default)]
    pub display_name: String,
    pub logo_url: Option<String>,
    pub theme_color: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Tax rate as a fraction (0.10 = 10%)
    #[serde(default)]
    pub tax_rate: f64,
    /// Flat delivery fee applied to delivery orders
    #[serde(default)]
    pub delivery_fee: f64,
    #[serde(default = "default_true")]
    pub is_storefront_enabled: bool,
    pub updated_at: i64,
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanySettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_storefront_enabled: Option<bool>,
}

/// System setting — tenant-scoped key/value pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SystemSetting {
    pub tenant_id: i64,
    pub key: String,
    pub value: String,
    pub updated_at: i64,
}

/// PUT body for a system setting (upsert)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSettingUpdate {
    pub value: String,
}
