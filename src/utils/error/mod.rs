//! Error handling utilities
//!
//! This module provides the crate error type and result alias.

#[allow(clippy::module_inception)]
pub mod error;

pub use error::*;
