//! # OpsDesk Access
//!
//! Role-based access control for the OpsDesk business-operations app
//! (clients, projects, time tracking, invoicing, admin settings).
//!
//! ## Features
//!
//! - **Role Catalog**: Fixed role hierarchy `viewer < member < manager < admin`
//!   with a monotonic role → permission table
//! - **Auth Session**: Current user, resolved permissions, hierarchical role checks
//! - **Explicit Scopes**: Sessions are handed to consumers, never looked up ambiently
//! - **Access Guard**: Render-time choice between protected content and a fallback
//! - **Shell Models**: Navigation gating and the collapsible sidebar state machine
//!
//! This is UI gating, not a security boundary.
//!
//! ## Quick Start
//!
//! ```rust
//! use opsdesk::auth::{
//!     AccessGuard, AuthProvider, AuthenticatedUser, Guarded, Permission, Role, RoleCatalog,
//! };
//!
//! let provider = AuthProvider::new(RoleCatalog::shared());
//! provider.set_user(Some(AuthenticatedUser::new(
//!     "u-1",
//!     "Sam Lee",
//!     "sam@example.com",
//!     Role::Member,
//! )));
//!
//! let rendered = AccessGuard::new("Delete client")
//!     .require_permission(Permission::CLIENTS_DELETE)
//!     .render(&provider.scope())?;
//!
//! match rendered {
//!     Guarded::Denied(view) => assert!(view.to_string().contains("Current role: member")),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), opsdesk::AccessError>(())
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod ui;
pub mod utils;

// Re-export main types
pub use auth::{
    AccessDeniedView, AccessGuard, AuthProvider, AuthScope, AuthSession, AuthenticatedUser,
    GuardDecision, Guarded, Permission, Role, RoleCatalog,
};
pub use config::Config;
pub use utils::error::{AccessError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
