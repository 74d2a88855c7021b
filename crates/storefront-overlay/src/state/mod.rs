//! # State Module
//!
//! State owned by the overlay host surface.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OverlayConfig   read-only, built once (env + defaults)                │
//! │  OverlaySession  one per open/close cycle, dropped on close            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{OverlayConfig, DEFAULTED_INPUT_NOTICE};
pub use session::OverlaySession;
