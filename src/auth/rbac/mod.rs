//! Role-Based Access Control (RBAC) catalog
//!
//! This module provides the static role hierarchy and the role → permission
//! table consulted by every authorization decision.

mod permissions;
mod roles;
mod system;
mod types;

// Re-export public types and structs
pub use system::RoleCatalog;
pub use types::{Permission, Role};
