//! Error handling for OpsDesk access control
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for OpsDesk access control
pub type Result<T> = std::result::Result<T, AccessError>;

/// Main error type for OpsDesk access control
///
/// Authorization outcomes (unauthenticated, missing permission, insufficient
/// role) are never errors; they are answered as `false` or rendered as a
/// fallback. Errors are reserved for wiring and configuration problems.
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configuration errors, including queries issued without a session scope
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors reading configuration or writing command output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Helper functions for creating specific errors
impl AccessError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error signals a wiring or configuration mistake
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
