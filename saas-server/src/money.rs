//! Money calculation utilities using rust_decimal for precision
//!
//! All order totals are computed with `Decimal` internally and converted
//! back to `f64` for storage and serialization.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per item
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i64 = 9999;

pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Validate a unit price coming from the database or a request
pub fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() {
        return Err(format!("price must be a finite number, got {price}"));
    }
    if price < 0.0 {
        return Err(format!("price must be non-negative, got {price}"));
    }
    if price > MAX_PRICE {
        return Err(format!(
            "price exceeds maximum allowed ({MAX_PRICE}), got {price}"
        ));
    }
    Ok(())
}

/// line_total = unit_price × quantity, rounded half-up to cents
pub fn line_total(unit_price: f64, quantity: i64) -> f64 {
    let total = to_decimal(unit_price) * Decimal::from(quantity);
    to_f64(total)
}

/// Derived order totals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

/// Compute order totals from line totals.
///
/// subtotal = Σ line_total, tax = subtotal × tax_rate (fraction),
/// total = subtotal + tax + delivery_fee. Each figure rounds to cents
/// independently so the stored columns always add up.
pub fn order_totals(line_totals: &[f64], tax_rate: f64, delivery_fee: f64) -> OrderTotals {
    let subtotal: Decimal = line_totals.iter().map(|v| to_decimal(*v)).sum();
    let subtotal = subtotal
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    let tax = (subtotal * to_decimal(tax_rate))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    let fee = to_decimal(delivery_fee)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    let total = subtotal + tax + fee;

    OrderTotals {
        subtotal: to_f64(subtotal),
        tax: to_f64(tax),
        delivery_fee: to_f64(fee),
        total: to_f64(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total_rounds_half_up() {
        // 3 × 1.115 = 3.345 → 3.35 (away from zero at the midpoint)
        assert_eq!(line_total(1.115, 3), 3.35);
        assert_eq!(line_total(2.50, 2), 5.00);
        assert_eq!(line_total(0.0, 5), 0.0);
    }

    #[test]
    fn test_order_totals_basic() {
        let totals = order_totals(&[10.0, 5.50], 0.10, 0.0);
        assert_eq!(totals.subtotal, 15.50);
        assert_eq!(totals.tax, 1.55);
        assert_eq!(totals.delivery_fee, 0.0);
        assert_eq!(totals.total, 17.05);
    }

    #[test]
    fn test_order_totals_with_delivery_fee() {
        let totals = order_totals(&[20.0], 0.21, 3.50);
        assert_eq!(totals.subtotal, 20.0);
        assert_eq!(totals.tax, 4.20);
        assert_eq!(totals.delivery_fee, 3.50);
        assert_eq!(totals.total, 27.70);
    }

    #[test]
    fn test_order_totals_avoids_float_drift() {
        // 0.1 + 0.2 style inputs must still come out exact
        let totals = order_totals(&[0.1, 0.2], 0.0, 0.0);
        assert_eq!(totals.subtotal, 0.30);
        assert_eq!(totals.total, 0.30);
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(9.99).is_ok());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(2_000_000.0).is_err());
    }
}
