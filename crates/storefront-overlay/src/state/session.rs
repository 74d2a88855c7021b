//! # Overlay Session
//!
//! Working state for one open-to-close cycle of the overlay.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Session Lifecycle                               │
//! │                                                                         │
//! │  open(product, qty) ──► start(): field seeded from the host's quantity │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  keystrokes ──────────► set_field(): field = normalized input          │
//! │        │                                                                │
//! │  host changes inputs ─► reseed(): field seeded again                   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  close() ─────────────► session dropped, nothing carried over          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices and validation are never stored; they are derived from the
//! product and the field each time they are asked for.

use chrono::{DateTime, Utc};
use storefront_core::{
    compute_prices, validate_normalized, CandidateQuantity, CoreResult, NormalizedQuantity,
    PriceBreakdown, Product, ValidQuantity, ValidationResult,
};
use uuid::Uuid;

/// One overlay session.
#[derive(Debug, Clone)]
pub struct OverlaySession {
    id: Uuid,
    product: Product,
    field: NormalizedQuantity,
    opened_at: DateTime<Utc>,
}

impl OverlaySession {
    /// Starts a session, seeding the field from the host's quantity.
    pub fn start(product: Product, quantity: i64) -> CoreResult<Self> {
        product.validate()?;

        Ok(OverlaySession {
            id: Uuid::new_v4(),
            product,
            field: seeded(quantity),
            opened_at: Utc::now(),
        })
    }

    /// Replaces product and field with the host's current values.
    ///
    /// On an invalid product the session is left untouched.
    pub fn reseed(&mut self, product: Product, quantity: i64) -> CoreResult<()> {
        product.validate()?;
        self.product = product;
        self.field = seeded(quantity);
        Ok(())
    }

    /// Writes raw widget input into the field, applying the default for
    /// unusable input. Returns what was stored.
    pub fn set_field(&mut self, candidate: &CandidateQuantity) -> NormalizedQuantity {
        self.field = candidate.normalize();
        self.field
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn field(&self) -> NormalizedQuantity {
        self.field
    }

    #[inline]
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Validates the current field against stock.
    pub fn validation(&self) -> ValidationResult<ValidQuantity> {
        validate_normalized(self.field, self.product.stock)
    }

    /// Quantity used for the price preview.
    ///
    /// Negative values preview as 0; everything else is priced as typed,
    /// even far beyond stock.
    pub fn preview_quantity(&self) -> u64 {
        u64::try_from(self.field.value).unwrap_or(0)
    }

    /// Prices for the current field, valid or not.
    pub fn prices(&self) -> PriceBreakdown {
        compute_prices(&self.product, self.preview_quantity())
    }
}

fn seeded(quantity: i64) -> NormalizedQuantity {
    NormalizedQuantity {
        value: quantity,
        defaulted: false,
    }
}
