//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Product record problems                        │
//! │  └── ValidationError  - Candidate quantity judgments                   │
//! │                                                                         │
//! │  storefront-overlay errors (separate crate)                            │
//! │  └── OverlayError     - What the host surface reports                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → OverlayError → Frontend           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant here is recoverable. The overlay stays open and the
//! shopper corrects the input; nothing in this crate panics on bad input.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The product record cannot be priced as supplied.
    ///
    /// ## When This Occurs
    /// - Price is negative, NaN, infinite or above `MAX_UNIT_PRICE`
    /// - Discount flagged on but the percentage is outside `[0, 100]`
    #[error("Invalid product {field}: {reason}")]
    InvalidProduct { field: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Quantity validation outcomes that block the commit action.
///
/// The messages are the exact strings shown under the quantity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Candidate is less than 1.
    #[error("Quantity must be at least 1")]
    BelowMinimum { requested: i64 },

    /// Candidate is more than the product's stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Stock: 1, shopper types 2
    ///      │
    ///      ▼
    /// ExceedsStock { requested: 2, stock: 1 }
    ///      │
    ///      ▼
    /// Field shows: "Only 1 item available in stock"
    /// ```
    #[error("Only {} {} available in stock", .stock, item_noun(.stock))]
    ExceedsStock { requested: i64, stock: u32 },

    /// The input widget produced something that is not a number.
    ///
    /// Never surfaced as a blocking failure: `validate_quantity` recovers
    /// from it by substituting `DEFAULT_QUANTITY`.
    #[error("Quantity is not a number")]
    NonNumericInput,
}

fn item_noun(count: &u32) -> &'static str {
    if *count == 1 {
        "item"
    } else {
        "items"
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
