//! # storefront-core: Quantity/Price Reconciler
//!
//! This crate holds the only non-trivial logic behind the storefront's
//! product-detail overlay: judging a requested quantity against stock and
//! deriving the discounted prices shown next to it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Overlay Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (renders values)                    │   │
//! │  │       Image ──► Price badge ──► Quantity field ──► Add to Cart  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               storefront-overlay (host surface)                 │   │
//! │  │        open / sync / close, field state, commit gating          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ validation │  │  pricing  │  │   money   │  │   │
//! │  │   │  Product  │  │ Candidate  │  │ PriceBrk  │  │  display  │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The product record supplied by the host
//! - [`validation`] - Candidate quantity normalization and stock checks
//! - [`pricing`] - Discounted unit price, totals and savings
//! - [`money`] - Two-decimal display boundary
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{compute_prices, validate_quantity, CandidateQuantity, Product};
//!
//! let product = Product::new(7, "Desk Lamp", 100.0, 5).with_discount(20.0);
//!
//! let quantity = validate_quantity(&CandidateQuantity::from(3), product.stock).unwrap();
//! let prices = compute_prices(&product, u64::from(quantity.get()));
//!
//! assert_eq!(prices.total_price, 240.0);
//! assert_eq!(prices.savings, 60.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{format_amount, Money};
pub use pricing::{compute_prices, PriceBreakdown};
pub use types::Product;
pub use validation::{
    validate_normalized, validate_quantity, CandidateQuantity, NormalizedQuantity, ValidQuantity,
    ValidationResult,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest quantity a shopper can commit.
pub const MIN_QUANTITY: i64 = 1;

/// Quantity substituted when the input widget hands over nothing usable
/// (cleared field, non-numeric text).
pub const DEFAULT_QUANTITY: i64 = MIN_QUANTITY;

/// Largest unit price a product record may carry.
///
/// Keeps `quantity * price` finite for every `u64` quantity, so no
/// infinity (and no `inf - inf` NaN in savings) reaches the display.
pub const MAX_UNIT_PRICE: f64 = 1.0e12;
