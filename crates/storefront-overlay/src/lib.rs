//! # Storefront Overlay Library
//!
//! Host surface for the storefront's product-detail overlay. It owns the
//! session and the quantity field, and delegates every judgment and every
//! price to `storefront-core`.
//!
//! ## Module Organization
//! ```text
//! storefront_overlay/
//! ├── lib.rs          ◄─── You are here (exports, tracing setup)
//! ├── overlay.rs      ◄─── ProductDetailsOverlay: open/sync/input/submit/close
//! ├── view.rs         ◄─── View model: price variants, total line
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── One open-to-close session
//! │   └── config.rs   ◄─── Labels and notice switch
//! └── error.rs        ◄─── Overlay error + frontend payload
//! ```
//!
//! ## Example
//! ```rust
//! use storefront_core::Product;
//! use storefront_overlay::{OverlayConfig, ProductDetailsOverlay};
//!
//! let mut overlay = ProductDetailsOverlay::new(OverlayConfig::default());
//! let product = Product::new(7, "Desk Lamp", 100.0, 5).with_discount(20.0);
//!
//! overlay.open(product, 1).unwrap();
//! let feedback = overlay.on_quantity_input("3").unwrap();
//! assert!(feedback.commit_enabled);
//!
//! let view = overlay.view().unwrap();
//! assert_eq!(view.total.total, "$240.00");
//!
//! let commit = overlay.submit().unwrap();
//! assert_eq!(commit.quantity, 3);
//! overlay.close();
//! ```

pub mod error;
pub mod overlay;
pub mod state;
pub mod view;

use tracing_subscriber::EnvFilter;

pub use error::{ErrorCode, ErrorResponse, OverlayError, OverlayResult};
pub use overlay::{CommitRequest, ProductDetailsOverlay, QuantityFeedback};
pub use state::{OverlayConfig, OverlaySession};
pub use view::{OverlayView, PriceDisplay, TotalLine};

/// Installs the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every quantity reconciliation
/// - `RUST_LOG=storefront_core=trace` - Also show input defaulting
/// - Default: INFO, DEBUG for the storefront crates
///
/// Safe to call more than once; later calls leave the first subscriber
/// in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_core=debug,storefront_overlay=debug"));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
