//! Session provider and explicit session scopes
//!
//! Consumers never look the session up ambiently. The host owns an
//! [`AuthProvider`], hands each render pass an [`AuthScope`] taken from it, and
//! every consumer receives that scope as an argument. A scope that was never
//! bound to a provider answers every query with a configuration error.

use crate::auth::rbac::{Permission, Role, RoleCatalog};
use crate::auth::session::{AuthSession, LogoutHook};
use crate::auth::types::AuthenticatedUser;
use crate::utils::error::{AccessError, Result};
use arc_swap::ArcSwap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info};

const MISSING_PROVIDER: &str =
    "authorization queried outside of an AuthProvider scope; bind the scope with AuthProvider::scope()";

/// Owner of the current session
///
/// The session is replaced wholesale on every user change, so a reader holding
/// an older `Arc<AuthSession>` keeps a consistent snapshot.
pub struct AuthProvider {
    catalog: Arc<RoleCatalog>,
    on_logout: Option<LogoutHook>,
    current: ArcSwap<AuthSession>,
}

impl AuthProvider {
    /// Create a provider with no signed-in user
    pub fn new(catalog: Arc<RoleCatalog>) -> Self {
        info!("Creating auth provider");

        let session = AuthSession::anonymous(Arc::clone(&catalog));
        Self {
            catalog,
            on_logout: None,
            current: ArcSwap::from_pointee(session),
        }
    }

    /// Install the logout callback handed to every session
    pub fn with_logout<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_logout = Some(Arc::new(hook));
        let user = self.current.load().current_user().cloned();
        self.current.store(Arc::new(self.build_session(user)));
        self
    }

    /// Replace the current user; `None` signs the user out of the view
    pub fn set_user(&self, user: Option<AuthenticatedUser>) {
        match &user {
            Some(user) => debug!("Session user changed to {} ({})", user.id, user.role),
            None => debug!("Session cleared"),
        }
        self.current.store(Arc::new(self.build_session(user)));
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Arc<AuthSession> {
        self.current.load_full()
    }

    /// Scope bound to the current session
    pub fn scope(&self) -> AuthScope {
        AuthScope::bound(self.session())
    }

    pub fn catalog(&self) -> &Arc<RoleCatalog> {
        &self.catalog
    }

    fn build_session(&self, user: Option<AuthenticatedUser>) -> AuthSession {
        AuthSession::new(user, Arc::clone(&self.catalog), self.on_logout.clone())
    }
}

/// Session handle threaded explicitly to consumers
///
/// `AuthScope::default()` is detached: it stands for a consumer wired without a
/// provider, which is a programming error rather than an unauthenticated user.
#[derive(Debug, Clone, Default)]
pub struct AuthScope {
    session: Option<Arc<AuthSession>>,
}

impl AuthScope {
    /// Scope bound to a session
    pub fn bound(session: Arc<AuthSession>) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// Scope with no provider behind it
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn is_bound(&self) -> bool {
        self.session.is_some()
    }

    /// The bound session, or a configuration error when detached
    pub fn session(&self) -> Result<&AuthSession> {
        self.session.as_deref().ok_or_else(|| {
            error!("{}", MISSING_PROVIDER);
            AccessError::config(MISSING_PROVIDER)
        })
    }

    pub fn current_user(&self) -> Result<Option<&AuthenticatedUser>> {
        Ok(self.session()?.current_user())
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.session()?.is_authenticated())
    }

    pub fn permissions(&self) -> Result<&HashSet<Permission>> {
        Ok(self.session()?.permissions())
    }

    pub fn has_permission(&self, permission: &Permission) -> Result<bool> {
        Ok(self.session()?.has_permission(permission))
    }

    pub fn has_role(&self, required: Role) -> Result<bool> {
        Ok(self.session()?.has_role(required))
    }

    pub fn logout(&self) -> Result<()> {
        self.session()?.logout();
        Ok(())
    }
}
