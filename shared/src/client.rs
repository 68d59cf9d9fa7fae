//! Client-facing DTOs
//!
//! Request/response payloads shared between the server and back-office
//! clients (login flow, current user info).

use serde::{Deserialize, Serialize};

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub role: String,
    /// Tenant the user belongs to (None for platform admins)
    #[serde(default)]
    pub tenant_id: Option<i64>,
}
