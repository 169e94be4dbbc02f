//! Common test utilities for opsdesk
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{UserFactory, scope_for};
//!
//! let scope = scope_for(Some(UserFactory::manager()));
//! ```

pub mod fixtures;

pub use fixtures::{UserFactory, provider_with, scope_for};
