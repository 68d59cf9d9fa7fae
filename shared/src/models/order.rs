//! Order Models
//!
//! Orders, their line items, and the status timeline. Totals are derived
//! server-side; client payloads never carry money fields.

use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "preparing" => Ok(Self::Preparing),
            "ready" => Ok(Self::Ready),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("Unknown order status: {other}")),
        }
    }
}

/// Order fulfilment type
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum OrderType {
    #[default]
    Pickup,
    Delivery,
    DineIn,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub tenant_id: i64,
    /// Sequential per-tenant number shown on receipts
    pub order_number: i64,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub order_type: OrderType,
    pub table_id: Option<i64>,
    pub status: OrderStatus,
    pub subtotal: f64,
    pub tax: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub note: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Order line item (snapshot of the menu item at order time)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    /// NULL when the menu item was later deleted
    pub menu_item_id: Option<i64>,
    pub name: String,
    pub unit_price: f64,
    pub quantity: i64,
    pub line_total: f64,
    pub note: Option<String>,
}

/// Order timeline entry — one row per status change
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderTimelineEntry {
    pub id: i64,
    pub order_id: i64,
    pub status: OrderStatus,
    pub note: Option<String>,
    pub created_at: i64,
}

/// Full order view: order + items + timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub timeline: Vec<OrderTimelineEntry>,
}

/// Line item in an order creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub menu_item_id: i64,
    pub quantity: i64,
    pub note: Option<String>,
}

/// Order creation request (back office and storefront)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(default)]
    pub order_type: OrderType,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub table_id: Option<i64>,
    pub note: Option<String>,
    pub items: Vec<OrderItemCreate>,
}

/// Status transition request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
    pub note: Option<String>,
}
