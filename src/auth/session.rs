//! Authorization session
//!
//! An [`AuthSession`] is the resolved view of one user against the role
//! catalog. It is immutable: when the user changes, build a new session.

use crate::auth::rbac::{Permission, Role, RoleCatalog};
use crate::auth::types::AuthenticatedUser;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Callback invoked on logout
pub type LogoutHook = Arc<dyn Fn() + Send + Sync>;

/// Current user, resolved permissions and authorization queries
#[derive(Clone)]
pub struct AuthSession {
    user: Option<AuthenticatedUser>,
    permissions: HashSet<Permission>,
    catalog: Arc<RoleCatalog>,
    on_logout: Option<LogoutHook>,
}

impl AuthSession {
    /// Resolve a session for `user` (or the unauthenticated session for `None`)
    pub fn new(
        user: Option<AuthenticatedUser>,
        catalog: Arc<RoleCatalog>,
        on_logout: Option<LogoutHook>,
    ) -> Self {
        let permissions = match &user {
            Some(user) => catalog.permissions_for(user.role).clone(),
            None => HashSet::new(),
        };

        Self {
            user,
            permissions,
            catalog,
            on_logout,
        }
    }

    /// Session for a signed-in user
    pub fn for_user(user: AuthenticatedUser, catalog: Arc<RoleCatalog>) -> Self {
        Self::new(Some(user), catalog, None)
    }

    /// Session with no user
    pub fn anonymous(catalog: Arc<RoleCatalog>) -> Self {
        Self::new(None, catalog, None)
    }

    /// Attach the logout callback
    pub fn with_logout<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_logout = Some(Arc::new(hook));
        self
    }

    pub fn current_user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    /// Role of the current user
    pub fn current_role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// True iff a user was supplied. No token checks happen here.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Resolved permissions; empty when unauthenticated
    pub fn permissions(&self) -> &HashSet<Permission> {
        &self.permissions
    }

    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Hierarchical role check: a higher rank satisfies a lower requirement
    pub fn has_role(&self, required: Role) -> bool {
        match &self.user {
            Some(user) => self.catalog.outranks_or_equals(user.role, required),
            None => false,
        }
    }

    /// True if any of `permissions` is held
    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.has_permission(p))
    }

    /// True if every one of `permissions` is held
    ///
    /// An empty list is satisfied only by an authenticated session.
    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        self.is_authenticated() && permissions.iter().all(|p| self.has_permission(p))
    }

    /// Check resource-level permission, e.g. `can("clients", "read")`
    pub fn can(&self, resource: &str, action: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p.resource() == resource && p.action() == Some(action))
    }

    /// Catalog this session was resolved against
    pub fn catalog(&self) -> &Arc<RoleCatalog> {
        &self.catalog
    }

    /// Invoke the logout callback once; no-op without one
    pub fn logout(&self) {
        match &self.on_logout {
            Some(hook) => {
                info!(
                    "User logout: {}",
                    self.user.as_ref().map_or("anonymous", |u| u.id.as_str())
                );
                hook();
            }
            None => info!("Logout requested with no logout handler installed"),
        }
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("user", &self.user)
            .field("permissions", &self.permissions.len())
            .field("has_logout_hook", &self.on_logout.is_some())
            .finish()
    }
}
