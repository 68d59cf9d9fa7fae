//! User Model
//!
//! Back-office accounts: platform admins (no tenant) and per-tenant
//! owners/staff.

use serde::{Deserialize, Serialize};

/// User role
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum UserRole {
    /// Platform administrator (marketing site, tenants, pricing)
    Platform,
    /// Tenant owner (full access to own tenant)
    Owner,
    /// Tenant staff member
    #[default]
    Staff,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Owner => "owner",
            Self::Staff => "staff",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "platform" => Ok(Self::Platform),
            "owner" => Ok(Self::Owner),
            "staff" => Ok(Self::Staff),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    /// None for platform administrators
    pub tenant_id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    pub email: Option<String>,
    /// Argon2 hash; never serialized into API responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New plaintext password (re-hashed on update)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
