//! # Domain Types
//!
//! The product record the overlay is opened with.
//!
//! ## Field Roles
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Product                                      │
//! │                                                                         │
//! │  Read by the reconciler            Passed through for display          │
//! │  ───────────────────────           ──────────────────────────          │
//! │  price                             id                                  │
//! │  stock                             name                                │
//! │  has_discount                      description                         │
//! │  discount_percentage               category, images                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The record is immutable for one overlay session. It arrives from the
//! storefront frontend as camelCase JSON (`hasDiscount`,
//! `discountPercentage`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::MAX_UNIT_PRICE;

// =============================================================================
// Product
// =============================================================================

/// A product shown in the product-detail overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Long-form description.
    #[serde(default)]
    pub description: String,

    /// Base unit price before any discount.
    pub price: f64,

    /// Base64-encoded PNG payload.
    #[serde(default)]
    pub images: String,

    #[serde(default)]
    pub category: String,

    /// Maximum purchasable quantity.
    pub stock: u32,

    /// Whether `discount_percentage` applies.
    #[serde(default)]
    pub has_discount: bool,

    /// Percentage off in `[0, 100]`. Ignored unless `has_discount`.
    #[serde(default)]
    pub discount_percentage: f64,
}

impl Product {
    /// Creates an undiscounted product with empty display fields.
    pub fn new(id: i64, name: impl Into<String>, price: f64, stock: u32) -> Self {
        Product {
            id,
            name: name.into(),
            description: String::new(),
            price,
            images: String::new(),
            category: String::new(),
            stock,
            has_discount: false,
            discount_percentage: 0.0,
        }
    }

    /// Turns on a percentage discount.
    pub fn with_discount(mut self, percentage: f64) -> Self {
        self.has_discount = true;
        self.discount_percentage = percentage;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Parses a product record as the frontend sends it.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidProduct {
            field: "record".to_string(),
            reason: e.to_string(),
        })
    }

    /// The percentage actually applied: `0` when there is no discount.
    #[inline]
    pub fn effective_discount_percentage(&self) -> f64 {
        if self.has_discount {
            self.discount_percentage
        } else {
            0.0
        }
    }

    /// Source for the product image element.
    pub fn image_data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.images)
    }

    /// Checks that the record can be priced.
    ///
    /// ## Rules
    /// - `price` is finite and in `[0, MAX_UNIT_PRICE]`
    /// - with a discount, `discount_percentage` is finite and in `[0, 100]`
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Product;
    ///
    /// assert!(Product::new(1, "Mug", 12.5, 3).validate().is_ok());
    /// assert!(Product::new(1, "Mug", -1.0, 3).validate().is_err());
    /// assert!(Product::new(1, "Mug", 12.5, 3).with_discount(120.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> CoreResult<()> {
        if !self.price.is_finite() {
            return Err(invalid("price", "must be a finite number"));
        }

        if self.price < 0.0 {
            return Err(invalid("price", "must not be negative"));
        }

        if self.price > MAX_UNIT_PRICE {
            return Err(invalid("price", "exceeds the maximum unit price"));
        }

        if self.has_discount
            && !(self.discount_percentage.is_finite()
                && (0.0..=100.0).contains(&self.discount_percentage))
        {
            return Err(invalid("discountPercentage", "must be between 0 and 100"));
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> CoreError {
    CoreError::InvalidProduct {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
