//! # Product Details Overlay
//!
//! The host surface that drives the reconciler.
//!
//! ## Interaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Host page                     Overlay                    Core         │
//! │  ─────────                     ───────                    ────         │
//! │  click product ──► open(product, qty) ── validate product ──►          │
//! │                                                                         │
//! │  type "4" ───────► on_quantity_input("4")                              │
//! │                      ├── field = 4 ──────── validate_quantity ─►       │
//! │                      ├── prices ─────────── compute_prices ────►       │
//! │  onQuantityChange(4) ◄── reported_quantity                              │
//! │                                                                         │
//! │  host re-renders ─► sync(product, 4)  (field re-seeded)                │
//! │                                                                         │
//! │  "Add to Cart" ──► submit() ── validate again ── CommitRequest ──►     │
//! │  "Cancel" ───────► close()  (session dropped)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The overlay never writes the host's authoritative quantity. It reports
//! the normalized value and the host decides what to do with it.

use chrono::Utc;
use serde::Serialize;
use storefront_core::{CandidateQuantity, PriceBreakdown, Product, ValidQuantity, ValidationResult};
use tracing::{debug, info, warn};

use crate::error::{OverlayError, OverlayResult};
use crate::state::{OverlayConfig, OverlaySession};
use crate::view::{input_notice, OverlayView};

/// Result of one quantity change.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityFeedback {
    /// Value for the host's `onQuantityChange`.
    pub reported_quantity: i64,
    pub validation: ValidationResult<ValidQuantity>,
    pub prices: PriceBreakdown,
    pub commit_enabled: bool,
    pub input_notice: Option<String>,
}

/// Payload handed to the host when "Add to Cart" succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRequest {
    pub product_id: i64,
    pub quantity: u32,
}

/// The product-detail overlay.
#[derive(Debug, Default)]
pub struct ProductDetailsOverlay {
    config: OverlayConfig,
    session: Option<OverlaySession>,
}

impl ProductDetailsOverlay {
    pub fn new(config: OverlayConfig) -> Self {
        ProductDetailsOverlay {
            config,
            session: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[inline]
    pub fn session(&self) -> Option<&OverlaySession> {
        self.session.as_ref()
    }

    /// Opens the overlay for `product`, seeding the field with `quantity`.
    ///
    /// An already open session is replaced. An invalid product leaves the
    /// overlay as it was.
    pub fn open(&mut self, product: Product, quantity: i64) -> OverlayResult<OverlayView> {
        let session = OverlaySession::start(product, quantity).map_err(|e| {
            warn!(error = %e, "Refusing to open overlay");
            OverlayError::from(e)
        })?;

        if let Some(previous) = self.session.replace(session) {
            debug!(session_id = %previous.id(), "Replacing open overlay session");
        }

        let session = self.open_session()?;
        info!(
            session_id = %session.id(),
            product_id = session.product().id,
            quantity,
            "Overlay opened"
        );

        self.view()
    }

    /// Re-seeds the open session after the host's product or quantity
    /// changed. Does nothing while closed.
    pub fn sync(&mut self, product: Product, quantity: i64) -> OverlayResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        session.reseed(product, quantity)?;
        debug!(
            session_id = %session.id(),
            product_id = session.product().id,
            quantity,
            "Overlay re-seeded"
        );
        Ok(())
    }

    /// Closes the overlay and discards the working state.
    ///
    /// Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                let open_ms = (Utc::now() - session.opened_at()).num_milliseconds();
                info!(session_id = %session.id(), open_ms, "Overlay closed");
                true
            }
            None => false,
        }
    }

    /// Handles a change of the quantity widget.
    ///
    /// Unusable input is replaced by 1 before it is stored or reported.
    /// Validation failures come back inside the feedback; they are not
    /// errors of this call.
    pub fn on_quantity_input(
        &mut self,
        raw: impl Into<CandidateQuantity>,
    ) -> OverlayResult<QuantityFeedback> {
        let candidate = raw.into();

        let session = self.session.as_mut().ok_or(OverlayError::NotOpen)?;
        let field = session.set_field(&candidate);
        let validation = session.validation();
        let prices = session.prices();

        debug!(
            session_id = %session.id(),
            candidate = ?candidate,
            quantity = field.value,
            defaulted = field.defaulted,
            valid = validation.is_ok(),
            total = prices.total_price,
            "Quantity reconciled"
        );

        Ok(QuantityFeedback {
            reported_quantity: field.value,
            commit_enabled: validation.is_ok(),
            validation,
            prices,
            input_notice: input_notice(&self.config, field.defaulted),
        })
    }

    /// Attempts the "Add to Cart" commit.
    ///
    /// The overlay stays open whatever the outcome; closing is the host's
    /// decision.
    pub fn submit(&self) -> OverlayResult<CommitRequest> {
        let session = self.open_session()?;

        match session.validation() {
            Ok(quantity) => {
                info!(
                    session_id = %session.id(),
                    product_id = session.product().id,
                    quantity = quantity.get(),
                    "Commit accepted"
                );
                Ok(CommitRequest {
                    product_id: session.product().id,
                    quantity: quantity.get(),
                })
            }
            Err(e) => {
                warn!(session_id = %session.id(), error = %e, "Commit rejected");
                Err(e.into())
            }
        }
    }

    /// Current view model.
    pub fn view(&self) -> OverlayResult<OverlayView> {
        let session = self.open_session()?;
        Ok(OverlayView::build(&self.config, session))
    }

    fn open_session(&self) -> OverlayResult<&OverlaySession> {
        self.session.as_ref().ok_or(OverlayError::NotOpen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_core::ValidationError;

    fn lamp() -> Product {
        Product::new(7, "Desk Lamp", 100.0, 5)
            .with_discount(20.0)
            .with_category("Lighting")
            .with_description("Adjustable arm")
    }

    fn open_overlay(quantity: i64) -> ProductDetailsOverlay {
        let mut overlay = ProductDetailsOverlay::default();
        overlay.open(lamp(), quantity).unwrap();
        overlay
    }

    #[test]
    fn test_open_renders_seeded_quantity() {
        let mut overlay = ProductDetailsOverlay::default();
        let view = overlay.open(lamp(), 3).unwrap();

        assert!(overlay.is_open());
        assert_eq!(view.title, "Product Details");
        assert_eq!(view.commit_label, "Add to Cart");
        assert_eq!(view.quantity, 3);
        assert_eq!(view.total.total, "$240.00");
        assert_eq!(view.total.savings.as_deref(), Some("$60.00"));
        assert!(view.commit_enabled);
        assert_eq!(view.field_error, None);
    }

    #[test]
    fn test_open_invalid_product_keeps_overlay_closed() {
        let mut overlay = ProductDetailsOverlay::default();
        let broken = Product::new(1, "Broken", 10.0, 1).with_discount(140.0);

        let err = overlay.open(broken, 1).unwrap_err();
        assert!(matches!(err, OverlayError::InvalidProduct(_)));
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_operations_require_open_session() {
        let mut overlay = ProductDetailsOverlay::default();
        assert_eq!(overlay.view().unwrap_err(), OverlayError::NotOpen);
        assert_eq!(overlay.submit().unwrap_err(), OverlayError::NotOpen);
        assert_eq!(
            overlay.on_quantity_input(2).unwrap_err(),
            OverlayError::NotOpen
        );
        // sync on a closed overlay is a no-op
        assert!(overlay.sync(lamp(), 2).is_ok());
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_quantity_input_over_stock_disables_commit() {
        let mut overlay = open_overlay(1);
        let feedback = overlay.on_quantity_input(6).unwrap();

        assert_eq!(feedback.reported_quantity, 6);
        assert!(!feedback.commit_enabled);
        assert_eq!(
            feedback.validation,
            Err(ValidationError::ExceedsStock {
                requested: 6,
                stock: 5
            })
        );
        // prices follow what was typed
        assert_eq!(feedback.prices.total_price, 480.0);

        let err = overlay.submit().unwrap_err();
        assert_eq!(err.to_string(), "Only 5 items available in stock");
        assert!(overlay.is_open());
    }

    #[test]
    fn test_cleared_input_reports_one() {
        let mut overlay = open_overlay(4);
        let feedback = overlay.on_quantity_input(&json!(null)).unwrap();

        assert_eq!(feedback.reported_quantity, 1);
        assert!(feedback.commit_enabled);
        assert_eq!(feedback.input_notice, None);
        assert_eq!(overlay.view().unwrap().quantity, 1);
    }

    #[test]
    fn test_defaulted_input_notice_when_enabled() {
        let config = OverlayConfig {
            flag_defaulted_input: true,
            ..OverlayConfig::default()
        };
        let mut overlay = ProductDetailsOverlay::new(config);
        overlay.open(lamp(), 2).unwrap();

        let feedback = overlay.on_quantity_input("abc").unwrap();
        assert_eq!(feedback.reported_quantity, 1);
        assert!(feedback.commit_enabled);
        assert!(feedback.input_notice.is_some());

        let view = overlay.view().unwrap();
        assert_eq!(view.input_notice, feedback.input_notice);

        let feedback = overlay.on_quantity_input("2").unwrap();
        assert_eq!(feedback.input_notice, None);
    }

    #[test]
    fn test_zero_is_below_minimum_not_defaulted() {
        let mut overlay = open_overlay(2);
        let feedback = overlay.on_quantity_input(0).unwrap();

        assert_eq!(feedback.reported_quantity, 0);
        assert_eq!(
            feedback.validation,
            Err(ValidationError::BelowMinimum { requested: 0 })
        );
        assert_eq!(feedback.prices.total_price, 0.0);
    }

    #[test]
    fn test_huge_input_total_matches_typed_quantity() {
        let mut overlay = ProductDetailsOverlay::default();
        overlay.open(Product::new(8, "Mug", 10.0, 2), 1).unwrap();

        let feedback = overlay.on_quantity_input(f64::MAX).unwrap();
        assert_eq!(feedback.reported_quantity, i64::MAX);
        assert!(!feedback.commit_enabled);

        // 10 × 2^63, printed at full magnitude rather than capped at i64 cents
        let view = overlay.view().unwrap();
        assert_eq!(view.total.total, "$92233720368547758080.00");
    }

    #[test]
    fn test_submit_returns_commit_request() {
        let mut overlay = open_overlay(1);
        overlay.on_quantity_input("5").unwrap();

        assert_eq!(
            overlay.submit().unwrap(),
            CommitRequest {
                product_id: 7,
                quantity: 5
            }
        );
        assert_eq!(
            serde_json::to_value(overlay.submit().unwrap()).unwrap(),
            json!({ "productId": 7, "quantity": 5 })
        );
    }

    #[test]
    fn test_sync_reseeds_field_from_host() {
        let mut overlay = open_overlay(1);
        overlay.on_quantity_input(9).unwrap();

        // host clamps and pushes its own value back
        overlay.sync(lamp(), 5).unwrap();
        let view = overlay.view().unwrap();
        assert_eq!(view.quantity, 5);
        assert!(view.commit_enabled);
    }

    #[test]
    fn test_close_discards_session() {
        let mut overlay = open_overlay(3);
        overlay.on_quantity_input(4).unwrap();

        assert!(overlay.close());
        assert!(!overlay.close());
        assert!(overlay.session().is_none());

        // reopening starts from the host's quantity, not the old field
        let view = overlay.open(lamp(), 1).unwrap();
        assert_eq!(view.quantity, 1);
    }

    #[test]
    fn test_reopen_replaces_session() {
        let mut overlay = open_overlay(1);
        let first = overlay.session().unwrap().id();

        overlay.open(Product::new(8, "Mug", 10.0, 2), 2).unwrap();
        let session = overlay.session().unwrap();
        assert_ne!(session.id(), first);
        assert_eq!(session.product().id, 8);
    }
}
