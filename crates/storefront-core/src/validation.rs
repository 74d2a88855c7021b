//! # Validation Module
//!
//! Normalizes raw quantity input and judges it against stock.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Quantity Field: every keystroke                      │
//! │                                                                         │
//! │  Raw widget value (null, "", "abc", 2.7, "4", 12)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CandidateQuantity::normalize()                                        │
//! │       ├── nothing usable? → DEFAULT_QUANTITY (1), defaulted = true     │
//! │       └── number → truncated toward zero                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_quantity() ← THIS MODULE                                     │
//! │       ├── qty < 1?     → BelowMinimum                                  │
//! │       ├── qty > stock? → ExceedsStock ("Only N items available…")      │
//! │       └── OK → ValidQuantity (commit enabled)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_quantity, CandidateQuantity};
//!
//! let ok = validate_quantity(&CandidateQuantity::from("3"), 5).unwrap();
//! assert_eq!(ok.get(), 3);
//!
//! let err = validate_quantity(&CandidateQuantity::from(6), 5).unwrap_err();
//! assert_eq!(err.to_string(), "Only 5 items available in stock");
//! ```

use serde_json::Value;
use tracing::trace;

use crate::error::ValidationError;
use crate::{DEFAULT_QUANTITY, MIN_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Candidate Quantity
// =============================================================================

/// A quantity exactly as the input widget produced it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CandidateQuantity {
    /// Cleared field or missing value.
    #[default]
    Absent,
    /// Numeric value, possibly fractional, negative or non-finite.
    Number(f64),
    /// Text typed into the field.
    Text(String),
}

/// A candidate reduced to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedQuantity {
    pub value: i64,
    /// `true` when `DEFAULT_QUANTITY` replaced unusable input.
    pub defaulted: bool,
}

impl CandidateQuantity {
    /// Reads a candidate from a JSON value sent by the frontend.
    ///
    /// Numbers and strings carry through; `null` is absent; anything else
    /// (booleans, arrays, objects) is treated as unusable text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => CandidateQuantity::Absent,
            Value::Number(n) => n
                .as_f64()
                .map(CandidateQuantity::Number)
                .unwrap_or(CandidateQuantity::Absent),
            Value::String(s) => CandidateQuantity::Text(s.clone()),
            other => CandidateQuantity::Text(other.to_string()),
        }
    }

    /// Interprets the candidate as an integer.
    ///
    /// ## Rules
    /// - Absent, blank, non-numeric text, NaN and infinities → `NonNumericInput`
    /// - Text is trimmed and parsed as a real number
    /// - Fractions are truncated toward zero, then saturated into `i64`
    pub fn to_integer(&self) -> ValidationResult<i64> {
        let number = match self {
            CandidateQuantity::Absent => return Err(ValidationError::NonNumericInput),
            CandidateQuantity::Number(n) => *n,
            CandidateQuantity::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| ValidationError::NonNumericInput)?,
        };

        if !number.is_finite() {
            return Err(ValidationError::NonNumericInput);
        }

        // `as` saturates at the i64 bounds
        Ok(number.trunc() as i64)
    }

    /// Applies the field's fallback: unusable input becomes `DEFAULT_QUANTITY`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::CandidateQuantity;
    ///
    /// let cleared = CandidateQuantity::from("").normalize();
    /// assert_eq!(cleared.value, 1);
    /// assert!(cleared.defaulted);
    ///
    /// let zero = CandidateQuantity::from(0).normalize();
    /// assert_eq!(zero.value, 0);
    /// assert!(!zero.defaulted);
    /// ```
    pub fn normalize(&self) -> NormalizedQuantity {
        match self.to_integer() {
            Ok(value) => NormalizedQuantity {
                value,
                defaulted: false,
            },
            Err(_) => {
                trace!(candidate = ?self, "Non-numeric quantity, using default");
                NormalizedQuantity {
                    value: DEFAULT_QUANTITY,
                    defaulted: true,
                }
            }
        }
    }
}

impl From<i64> for CandidateQuantity {
    fn from(value: i64) -> Self {
        CandidateQuantity::Number(value as f64)
    }
}

impl From<i32> for CandidateQuantity {
    fn from(value: i32) -> Self {
        CandidateQuantity::Number(f64::from(value))
    }
}

impl From<u32> for CandidateQuantity {
    fn from(value: u32) -> Self {
        CandidateQuantity::Number(f64::from(value))
    }
}

impl From<f64> for CandidateQuantity {
    fn from(value: f64) -> Self {
        CandidateQuantity::Number(value)
    }
}

impl From<&str> for CandidateQuantity {
    fn from(value: &str) -> Self {
        CandidateQuantity::Text(value.to_string())
    }
}

impl From<String> for CandidateQuantity {
    fn from(value: String) -> Self {
        CandidateQuantity::Text(value)
    }
}

impl From<&Value> for CandidateQuantity {
    fn from(value: &Value) -> Self {
        CandidateQuantity::from_json(value)
    }
}

impl<T: Into<CandidateQuantity>> From<Option<T>> for CandidateQuantity {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

// =============================================================================
// Valid Quantity
// =============================================================================

/// A quantity that passed validation: `1 <= quantity <= stock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidQuantity {
    value: u32,
    defaulted: bool,
}

impl ValidQuantity {
    #[inline]
    pub const fn get(&self) -> u32 {
        self.value
    }

    /// Whether the value came from the non-numeric fallback rather than
    /// from what the shopper typed.
    #[inline]
    pub const fn was_defaulted(&self) -> bool {
        self.defaulted
    }
}

// =============================================================================
// Validators
// =============================================================================

/// Validates a candidate quantity against the available stock.
///
/// ## Rules
/// - Absent or non-numeric input normalizes to `1` and is then checked
/// - Less than 1 → `BelowMinimum`
/// - More than `stock` → `ExceedsStock`
///
/// Pure and cheap; the overlay calls it on every keystroke.
pub fn validate_quantity(candidate: &CandidateQuantity, stock: u32) -> ValidationResult<ValidQuantity> {
    validate_normalized(candidate.normalize(), stock)
}

/// Validates a quantity the host already normalized, keeping its
/// defaulted marker.
pub fn validate_normalized(normalized: NormalizedQuantity, stock: u32) -> ValidationResult<ValidQuantity> {
    let value = check_quantity(normalized.value, stock)?;

    Ok(ValidQuantity {
        value,
        defaulted: normalized.defaulted,
    })
}

/// Range check on an already-normalized integer.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::check_quantity;
/// use storefront_core::ValidationError;
///
/// assert_eq!(check_quantity(5, 5), Ok(5));
/// assert_eq!(
///     check_quantity(0, 5),
///     Err(ValidationError::BelowMinimum { requested: 0 })
/// );
/// ```
pub fn check_quantity(requested: i64, stock: u32) -> ValidationResult<u32> {
    if requested < MIN_QUANTITY {
        return Err(ValidationError::BelowMinimum { requested });
    }

    if requested > i64::from(stock) {
        return Err(ValidationError::ExceedsStock { requested, stock });
    }

    // 1 <= requested <= stock, so it fits
    Ok(requested as u32)
}

// =============================================================================
// Unit Tests
// =============================================================================
