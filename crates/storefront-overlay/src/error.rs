//! # Overlay Error Type
//!
//! Errors reported by the overlay host surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Overlay                            │
//! │                                                                         │
//! │  submit()                                                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  No session? ──────────── OverlayError::NotOpen ─────────┐             │
//! │     │                                                    │             │
//! │     ▼                                                    ▼             │
//! │  Quantity invalid? ─── ValidationError ──► QuantityRejected ──► UI     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  CommitRequest ────────────────────────────────────────────────► host  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these close the overlay. The frontend receives an
//! [`ErrorResponse`] with a machine-readable `code` and the message to show.

use serde::Serialize;
use storefront_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors returned by [`crate::ProductDetailsOverlay`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    /// An operation needs an open session.
    #[error("Product details overlay is not open")]
    NotOpen,

    /// The product record cannot be shown.
    #[error(transparent)]
    InvalidProduct(#[from] CoreError),

    /// The commit was attempted with a quantity that fails validation.
    #[error(transparent)]
    QuantityRejected(#[from] ValidationError),
}

/// Convenience type alias for Results with OverlayError.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Serialized error payload.
///
/// ```json
/// {
///   "code": "EXCEEDS_STOCK",
///   "message": "Only 5 items available in stock"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

/// Error codes for the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotOpen,
    InvalidProduct,
    BelowMinimum,
    ExceedsStock,
    NonNumericInput,
}

impl From<&ValidationError> for ErrorCode {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::BelowMinimum { .. } => ErrorCode::BelowMinimum,
            ValidationError::ExceedsStock { .. } => ErrorCode::ExceedsStock,
            ValidationError::NonNumericInput => ErrorCode::NonNumericInput,
        }
    }
}

impl From<&OverlayError> for ErrorResponse {
    fn from(err: &OverlayError) -> Self {
        let code = match err {
            OverlayError::NotOpen => ErrorCode::NotOpen,
            OverlayError::InvalidProduct(CoreError::Validation(e)) => ErrorCode::from(e),
            OverlayError::InvalidProduct(_) => ErrorCode::InvalidProduct,
            OverlayError::QuantityRejected(e) => ErrorCode::from(e),
        };

        ErrorResponse {
            code,
            message: err.to_string(),
        }
    }
}
