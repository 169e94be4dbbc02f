//! Authentication and authorization
//!
//! This module provides the role catalog, the per-user authorization session,
//! the provider that owns it and the render-time access guard.

pub mod guard;
pub mod provider;
pub mod rbac;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use guard::{AccessDeniedView, AccessGuard, DenialReason, GuardDecision, Guarded};
pub use provider::{AuthProvider, AuthScope};
pub use rbac::{Permission, Role, RoleCatalog};
pub use session::{AuthSession, LogoutHook};
pub use types::AuthenticatedUser;
