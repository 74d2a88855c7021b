//! # Money Module
//!
//! The two-decimal display boundary.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_prices()  ──►  f64, full precision  ──►  Money::from_amount() │
//! │                                                        │                │
//! │                                                        ▼                │
//! │                                                 integer cents           │
//! │                                                        │                │
//! │                                                        ▼                │
//! │                                                 "$240.00" in the UI     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing never rounds. Rounding to cents once, here, keeps a total and
//! its savings from drifting apart across repeated recomputation.
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::{format_amount, Money};
//!
//! assert_eq!(format_amount(80.0), "$80.00");
//! assert_eq!(Money::from_amount(12.344).map(|m| m.cents()), Some(1234));
//! ```

use std::fmt;

/// `2^63`, the first cent count an `i64` cannot hold.
const CENTS_LIMIT: f64 = 9_223_372_036_854_775_808.0;

// =============================================================================
// Money Type
// =============================================================================

/// A display amount in cents.
///
/// Built from a pricing value at render time; never fed back into pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a full-precision amount to the nearest cent.
    ///
    /// Halves round away from zero. Returns `None` for non-finite amounts
    /// and for amounts whose cent count does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(19.99).map(|m| m.cents()), Some(1999));
    /// assert_eq!(Money::from_amount(0.006).map(|m| m.cents()), Some(1));
    /// assert_eq!(Money::from_amount(f64::NAN), None);
    /// assert_eq!(Money::from_amount(1e20), None);
    /// ```
    pub fn from_amount(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        if cents.is_finite() && cents.abs() < CENTS_LIMIT {
            Some(Money(cents as i64))
        } else {
            None
        }
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

/// Renders `$12.34`, or `-$5.50` for negative amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "${}.{:02}", magnitude / 100, magnitude % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Formats a pricing value for display with exactly two decimals.
///
/// Amounts too large for [`Money`] are printed from the float itself, so a
/// huge total is shown at its real magnitude instead of a saturated one.
/// Non-finite amounts display as `$0.00`.
pub fn format_amount(amount: f64) -> String {
    if let Some(money) = Money::from_amount(amount) {
        return money.to_string();
    }

    if !amount.is_finite() {
        return Money::zero().to_string();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${:.2}", sign, amount.abs())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(240.0), "$240.00");
        assert_eq!(format_amount(80.0), "$80.00");
        assert_eq!(format_amount(13.3333333), "$13.33");
        assert_eq!(format_amount(0.1 + 0.2), "$0.30");
    }

    #[test]
    fn test_non_finite_displays_as_zero() {
        assert_eq!(Money::from_amount(f64::NAN), None);
        assert_eq!(Money::from_amount(f64::INFINITY), None);
        assert_eq!(format_amount(f64::NAN), "$0.00");
        assert_eq!(format_amount(f64::NEG_INFINITY), "$0.00");
    }

    #[test]
    fn test_cent_range_boundary() {
        // 1e16 dollars is 1e18 cents, still an i64
        assert_eq!(
            Money::from_amount(1e16).map(|m| m.cents()),
            Some(1_000_000_000_000_000_000)
        );
        // rounds to 2^63 cents, one past i64::MAX
        assert_eq!(Money::from_amount(92_233_720_368_547_758.08), None);
        assert_eq!(Money::from_amount(-92_233_720_368_547_758.08), None);
    }

    #[test]
    fn test_amount_beyond_cents_is_not_saturated() {
        assert_eq!(format_amount(1e20), "$100000000000000000000.00");
        assert_eq!(format_amount(-1e20), "-$100000000000000000000.00");

        // the largest unit price times the largest stock
        let total = crate::MAX_UNIT_PRICE * f64::from(u32::MAX);
        let shown = format_amount(total);
        assert!(shown.starts_with("$4294967295000000"), "{shown}");
        assert!(shown.ends_with(".00"), "{shown}");
        assert_eq!(shown.len(), "$4294967295000000000000.00".len());
    }

    #[test]
    fn test_extreme_cents_display() {
        assert_eq!(Money::from_cents(i64::MAX).to_string(), "$92233720368547758.07");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-$92233720368547758.08");
    }

    #[test]
    fn test_negative_zero_displays_as_zero() {
        assert_eq!(format_amount(-0.0), "$0.00");
        assert_eq!(format_amount(-0.001), "$0.00");
    }
}
