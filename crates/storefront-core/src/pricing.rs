//! # Pricing Module
//!
//! Derives the numbers shown next to the quantity field.
//!
//! ```text
//! discounted_unit_price = has_discount ? price × (1 − pct / 100) : price
//! total_price           = quantity × discounted_unit_price
//! savings               = quantity × price − total_price
//! ```
//!
//! Values are full precision. Rounding to cents happens only at the
//! display boundary (see [`crate::money`]). Pricing does not re-check the
//! quantity range, so a quantity the shopper is still typing can be
//! previewed while validation reports why it cannot be committed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;
use crate::MAX_UNIT_PRICE;

/// Prices for one `(product, quantity)` pair.
///
/// Every field is finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceBreakdown {
    pub discounted_unit_price: f64,
    pub total_price: f64,
    /// Exactly `0.0` when the product has no discount.
    pub savings: f64,
}

/// Computes the discounted unit price, line total and savings.
///
/// Inputs that would poison the display are neutralized rather than
/// propagated: a non-finite or negative price counts as `0`, a price above
/// `MAX_UNIT_PRICE` is capped, and the percentage is clamped to `[0, 100]`
/// (NaN counts as `0`). With these bounds `discounted_unit_price <= price`
/// holds for every input, and every total stays finite.
///
/// `quantity` is whatever the shopper typed, stock or not. Above `2^53`
/// it is priced at the nearest representable `f64`.
///
/// ## Example
/// ```rust
/// use storefront_core::{compute_prices, Product};
///
/// let plain = Product::new(1, "Notebook", 4.5, 10);
/// let prices = compute_prices(&plain, 2);
/// assert_eq!(prices.discounted_unit_price, 4.5);
/// assert_eq!(prices.total_price, 9.0);
/// assert_eq!(prices.savings, 0.0);
/// ```
pub fn compute_prices(product: &Product, quantity: u64) -> PriceBreakdown {
    let price = sanitize_price(product.price);
    let quantity = quantity as f64;

    if !product.has_discount {
        return PriceBreakdown {
            discounted_unit_price: price,
            total_price: quantity * price,
            savings: 0.0,
        };
    }

    let percentage = clamp_percentage(product.discount_percentage);
    let discounted_unit_price = (price * (1.0 - percentage / 100.0)).min(price);
    let total_price = quantity * discounted_unit_price;
    // floors a possible -0.0
    let savings = (quantity * price - total_price).max(0.0);

    PriceBreakdown {
        discounted_unit_price,
        total_price,
        savings,
    }
}

fn sanitize_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price.min(MAX_UNIT_PRICE)
    } else {
        0.0
    }
}

fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_twenty_percent_off_three_units() {
        let product = Product::new(1, "Desk Lamp", 100.0, 10).with_discount(20.0);
        let prices = compute_prices(&product, 3);

        assert_close(prices.discounted_unit_price, 80.0);
        assert_close(prices.total_price, 240.0);
        assert_close(prices.savings, 60.0);
        assert_close(prices.total_price + prices.savings, 300.0);
    }

    #[test]
    fn test_no_discount_keeps_price_and_zero_savings() {
        let mut product = Product::new(1, "Mug", 12.99, 10);
        // percentage is ignored without the flag
        product.discount_percentage = 35.0;

        for quantity in [0, 1, 7, 10_000] {
            let prices = compute_prices(&product, quantity);
            assert_eq!(prices.discounted_unit_price, product.price);
            assert_eq!(prices.savings, 0.0);
        }
    }

    #[test]
    fn test_idempotent_bit_identical() {
        let product = Product::new(1, "Odd Price", 19.99, 10).with_discount(33.3);
        let first = compute_prices(&product, 7);
        let second = compute_prices(&product, 7);

        assert_eq!(
            first.discounted_unit_price.to_bits(),
            second.discounted_unit_price.to_bits()
        );
        assert_eq!(first.total_price.to_bits(), second.total_price.to_bits());
        assert_eq!(first.savings.to_bits(), second.savings.to_bits());
    }

    #[test]
    fn test_quantity_beyond_stock_is_still_priced() {
        let product = Product::new(1, "Mug", 5.0, 2);
        let prices = compute_prices(&product, 9);
        assert_close(prices.total_price, 45.0);
    }

    #[test]
    fn test_quantity_beyond_u32_is_priced_as_typed() {
        let product = Product::new(1, "Mug", 10.0, 2);
        let prices = compute_prices(&product, 10_000_000_000);
        assert_eq!(prices.total_price, 100_000_000_000.0);
    }

    #[test]
    fn test_zero_quantity_prices_to_zero() {
        let product = Product::new(1, "Mug", 5.0, 2).with_discount(50.0);
        let prices = compute_prices(&product, 0);
        assert_close(prices.discounted_unit_price, 2.5);
        assert_eq!(prices.total_price, 0.0);
        assert_eq!(prices.savings, 0.0);
    }

    #[test]
    fn test_full_discount_is_free() {
        let product = Product::new(1, "Promo", 8.0, 5).with_discount(100.0);
        let prices = compute_prices(&product, 2);
        assert_eq!(prices.discounted_unit_price, 0.0);
        assert_eq!(prices.total_price, 0.0);
        assert_close(prices.savings, 16.0);
    }

    #[test]
    fn test_malformed_inputs_never_produce_nan_or_negatives() {
        let cases = [
            Product::new(1, "a", f64::NAN, 1).with_discount(10.0),
            Product::new(1, "b", -4.0, 1).with_discount(10.0),
            Product::new(1, "c", f64::INFINITY, 1),
            Product::new(1, "d", 10.0, 1).with_discount(f64::NAN),
            Product::new(1, "e", 10.0, 1).with_discount(150.0),
            Product::new(1, "f", 10.0, 1).with_discount(-20.0),
        ];

        for product in cases {
            let prices = compute_prices(&product, u64::MAX);
            for value in [prices.discounted_unit_price, prices.total_price, prices.savings] {
                assert!(value.is_finite() && value >= 0.0, "{}: {value}", product.name);
            }
            assert!(prices.discounted_unit_price <= sanitize_price(product.price));
        }
    }

    #[test]
    fn test_discount_clamping() {
        let over = Product::new(1, "Mug", 10.0, 1).with_discount(150.0);
        assert_eq!(compute_prices(&over, 1).discounted_unit_price, 0.0);

        let under = Product::new(1, "Mug", 10.0, 1).with_discount(-20.0);
        assert_eq!(compute_prices(&under, 1).discounted_unit_price, 10.0);
    }
}
