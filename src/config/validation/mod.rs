//! Configuration validation
//!
//! - `auth_validators`: RBAC grant overrides
//! - `ui_validators`: sidebar settings
//! - `logging_validators`: log filter and format
//! - `tests`: Test suite for all validators

mod auth_validators;
mod logging_validators;
mod ui_validators;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
