//! # Overlay Configuration
//!
//! Labels and behavior switches for the product-detail overlay.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Read-only once the overlay is built.

use serde::{Deserialize, Serialize};

/// Notice shown when unusable quantity input was replaced by 1.
pub const DEFAULTED_INPUT_NOTICE: &str = "Quantity was not a number; reset to 1";

/// Overlay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayConfig {
    /// Overlay heading.
    pub title: String,

    /// Label of the commit action.
    pub commit_label: String,

    pub cancel_label: String,

    /// Surface a notice when a cleared or non-numeric quantity field was
    /// silently reset to 1. The reset itself always happens.
    pub flag_defaulted_input: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            title: "Product Details".to_string(),
            commit_label: "Add to Cart".to_string(),
            cancel_label: "Cancel".to_string(),
            flag_defaulted_input: false,
        }
    }
}

impl OverlayConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_OVERLAY_TITLE`: Override the heading
    /// - `STOREFRONT_COMMIT_LABEL`: Override the commit label
    /// - `STOREFRONT_CANCEL_LABEL`: Override the cancel label
    /// - `STOREFRONT_FLAG_DEFAULTED_INPUT`: `1`/`true`/`yes`/`on` enables the notice
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`OverlayConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = OverlayConfig::default();

        if let Some(title) = lookup("STOREFRONT_OVERLAY_TITLE") {
            config.title = title;
        }

        if let Some(label) = lookup("STOREFRONT_COMMIT_LABEL") {
            config.commit_label = label;
        }

        if let Some(label) = lookup("STOREFRONT_CANCEL_LABEL") {
            config.cancel_label = label;
        }

        if let Some(flag) = lookup("STOREFRONT_FLAG_DEFAULTED_INPUT") {
            config.flag_defaulted_input = parse_flag(&flag);
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
