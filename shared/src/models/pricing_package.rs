//! Pricing Package Model
//!
//! Subscription plans shown on the marketing site. `features` is stored as
//! a JSON array in a TEXT column; the repository handles the (de)serialization.

use serde::{Deserialize, Serialize};

/// Pricing package entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPackage {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub monthly_price: f64,
    /// Feature bullet points
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPackageCreate {
    pub name: String,
    pub description: Option<String>,
    pub monthly_price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    pub sort_order: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingPackageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
