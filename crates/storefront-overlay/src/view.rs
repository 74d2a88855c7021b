//! # View Model
//!
//! What the frontend renders for an open overlay.
//!
//! ## Price Display Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  has_discount = false            has_discount = true                   │
//! │  ─────────────────────           ────────────────────────────────      │
//! │  Regular                         Discounted                            │
//! │    $12.99                          ~~$100.00~~  $80.00  [20% OFF]      │
//! │                                                                         │
//! │  Total: $38.97                   Total: $240.00 (You save: $60.00)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only variant selection and formatting happen here. All numbers come
//! from a [`PriceBreakdown`] computed by the core.

use chrono::{DateTime, Utc};
use serde::Serialize;
use storefront_core::{format_amount, PriceBreakdown, Product};
use ts_rs::TS;
use uuid::Uuid;

use crate::state::{OverlayConfig, OverlaySession, DEFAULTED_INPUT_NOTICE};

/// Unit price presentation.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum PriceDisplay {
    Regular {
        price: String,
    },
    Discounted {
        /// Struck-through list price.
        original: String,
        discounted: String,
        /// Badge text, e.g. `20% OFF`.
        badge: String,
    },
}

impl PriceDisplay {
    pub fn select(product: &Product, prices: &PriceBreakdown) -> Self {
        if product.has_discount {
            PriceDisplay::Discounted {
                original: format_amount(product.price),
                discounted: format_amount(prices.discounted_unit_price),
                badge: format!("{}% OFF", product.effective_discount_percentage()),
            }
        } else {
            PriceDisplay::Regular {
                price: format_amount(product.price),
            }
        }
    }
}

/// The line under the quantity field.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TotalLine {
    pub total: String,
    /// Present only for discounted products.
    pub savings: Option<String>,
}

impl TotalLine {
    pub fn select(product: &Product, prices: &PriceBreakdown) -> Self {
        TotalLine {
            total: format_amount(prices.total_price),
            savings: product
                .has_discount
                .then(|| format_amount(prices.savings)),
        }
    }
}

/// Everything the overlay frontend needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OverlayView {
    /// Correlates frontend events with the overlay's log lines.
    #[ts(type = "string")]
    pub session_id: Uuid,
    #[ts(type = "string")]
    pub opened_at: DateTime<Utc>,

    pub title: String,
    pub commit_label: String,
    pub cancel_label: String,

    pub name: String,
    pub category_line: String,
    pub stock_line: String,
    pub description: String,
    pub image_src: String,

    /// Current value of the quantity field.
    pub quantity: i64,
    /// Validation message under the field.
    pub field_error: Option<String>,
    /// Shown when the field was reset from unusable input and the
    /// notice is enabled in config.
    pub input_notice: Option<String>,

    pub price: PriceDisplay,
    pub total: TotalLine,

    /// Whether "Add to Cart" is clickable.
    pub commit_enabled: bool,
}

impl OverlayView {
    pub fn build(config: &OverlayConfig, session: &OverlaySession) -> Self {
        let product = session.product();
        let prices = session.prices();
        let validation = session.validation();
        let field = session.field();

        OverlayView {
            session_id: session.id(),
            opened_at: session.opened_at(),
            title: config.title.clone(),
            commit_label: config.commit_label.clone(),
            cancel_label: config.cancel_label.clone(),
            name: product.name.clone(),
            category_line: format!("Category: {}", product.category),
            stock_line: format!("Available in stock: {}", product.stock),
            description: product.description.clone(),
            image_src: product.image_data_uri(),
            quantity: field.value,
            field_error: validation.as_ref().err().map(ToString::to_string),
            input_notice: input_notice(config, field.defaulted),
            price: PriceDisplay::select(product, &prices),
            total: TotalLine::select(product, &prices),
            commit_enabled: validation.is_ok(),
        }
    }
}

pub(crate) fn input_notice(config: &OverlayConfig, defaulted: bool) -> Option<String> {
    (config.flag_defaulted_input && defaulted).then(|| DEFAULTED_INPUT_NOTICE.to_string())
}
