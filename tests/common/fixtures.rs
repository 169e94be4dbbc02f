//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use opsdesk::{AuthProvider, AuthScope, AuthenticatedUser, Role, RoleCatalog};

/// Factory for creating test users
pub struct UserFactory;

impl UserFactory {
    /// Create a user with the given role
    pub fn with_role(role: Role) -> AuthenticatedUser {
        AuthenticatedUser::new(
            format!("user-{}", role),
            format!("Test {}", role),
            format!("{}@opsdesk.test", role),
            role,
        )
    }

    pub fn viewer() -> AuthenticatedUser {
        Self::with_role(Role::Viewer)
    }

    pub fn member() -> AuthenticatedUser {
        Self::with_role(Role::Member)
    }

    pub fn manager() -> AuthenticatedUser {
        Self::with_role(Role::Manager)
    }

    pub fn admin() -> AuthenticatedUser {
        Self::with_role(Role::Admin)
    }
}

/// Provider over the builtin catalog with `user` signed in
pub fn provider_with(user: Option<AuthenticatedUser>) -> AuthProvider {
    let provider = AuthProvider::new(RoleCatalog::shared());
    provider.set_user(user);
    provider
}

/// Scope bound to a fresh provider with `user` signed in
pub fn scope_for(user: Option<AuthenticatedUser>) -> AuthScope {
    provider_with(user).scope()
}
