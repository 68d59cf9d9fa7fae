//! Tenant Model
//!
//! A tenant is a restaurant/company record that owns its own menu,
//! settings, staff, and orders.

use serde::{Deserialize, Serialize};

/// Tenant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Tenant {
    pub id: i64,
    /// URL slug used by the public storefront (unique)
    pub slug: String,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantCreate {
    pub name: String,
    /// Optional explicit slug; derived from the name when absent
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
