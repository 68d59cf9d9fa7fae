//! Restaurant Table Models
//!
//! Physical tables and their reservations.

use serde::{Deserialize, Serialize};

/// Restaurant table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RestaurantTable {
    pub id: i64,
    pub tenant_id: i64,
    pub name: String,
    #[serde(default = "default_capacity")]
    pub capacity: i64,
    /// Free-form location hint ("terrace", "window", ...)
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_capacity() -> i64 {
    4
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantTableCreate {
    pub name: String,
    pub capacity: Option<i64>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantTableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Reservation status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ReservationStatus {
    #[default]
    Booked,
    Seated,
    Completed,
    Cancelled,
}

/// Table reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TableReservation {
    pub id: i64,
    pub tenant_id: i64,
    pub table_id: i64,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub party_size: i64,
    /// Reservation time (UTC milliseconds)
    pub reserved_at: i64,
    pub status: ReservationStatus,
    pub note: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub party_size: Option<i64>,
    pub reserved_at: i64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
