//! Configuration data models
//!
//! This module defines all configuration structures used throughout the crate.

pub mod auth;
pub mod logging;
pub mod ui;

// Re-export all configuration types
pub use auth::*;
pub use logging::*;
pub use ui::*;

pub(crate) fn default_true() -> bool {
    true
}
