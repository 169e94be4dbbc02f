//! Render-time access guard
//!
//! An [`AccessGuard`] wraps protected content with an optional permission
//! requirement and an optional role requirement. Every render re-evaluates
//! the guard against the session it is given; nothing is cached between
//! renders.

use crate::auth::provider::AuthScope;
use crate::auth::rbac::{Permission, Role};
use crate::auth::session::AuthSession;
use crate::utils::error::Result;
use std::fmt;
use tracing::debug;

/// Why a guard denied access
///
/// For logs and tests only. The user-facing view never carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialReason {
    /// No user in the session
    Unauthenticated,
    /// The session lacks the required permission
    MissingPermission(Permission),
    /// The user's role ranks below the required role
    InsufficientRole { required: Role, actual: Role },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::Unauthenticated => write!(f, "not authenticated"),
            DenialReason::MissingPermission(permission) => {
                write!(f, "missing permission: {}", permission)
            }
            DenialReason::InsufficientRole { required, actual } => {
                write!(f, "role {} does not satisfy {}", actual, required)
            }
        }
    }
}

/// Outcome of evaluating a guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Granted,
    Denied(DenialReason),
}

impl GuardDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, GuardDecision::Granted)
    }
}

/// Standard "Access Denied" view
///
/// Shows the user's current role and nothing about what was required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDeniedView {
    current_role: Option<Role>,
}

impl AccessDeniedView {
    pub const TITLE: &'static str = "Access Denied";
    pub const MESSAGE: &'static str = "You don't have permission to view this page.";
    /// Label of the navigation action the host wires to "go back"
    pub const GO_BACK: &'static str = "Go Back";

    pub fn new(current_role: Option<Role>) -> Self {
        Self { current_role }
    }

    pub fn for_session(session: &AuthSession) -> Self {
        Self::new(session.current_role())
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current_role
    }
}

impl fmt::Display for AccessDeniedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::TITLE)?;
        writeln!(f, "{}", Self::MESSAGE)?;
        match self.current_role {
            Some(role) => write!(f, "Current role: {}", role),
            None => write!(f, "Current role: not signed in"),
        }
    }
}

/// Result of rendering a guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    /// Access granted; the protected content
    Content(T),
    /// Access denied; the caller-supplied fallback
    Fallback(T),
    /// Access denied; the standard denial view
    Denied(AccessDeniedView),
}

impl<T> Guarded<T> {
    pub fn is_granted(&self) -> bool {
        matches!(self, Guarded::Content(_))
    }

    /// The protected content, if access was granted
    pub fn into_content(self) -> Option<T> {
        match self {
            Guarded::Content(content) => Some(content),
            Guarded::Fallback(_) | Guarded::Denied(_) => None,
        }
    }
}

/// Gate content behind authentication, a permission and/or a role
///
/// Requirements are conjunctive. With none, authentication alone suffices.
#[derive(Debug, Clone)]
pub struct AccessGuard<T> {
    content: T,
    permission: Option<Permission>,
    role: Option<Role>,
    fallback: Option<T>,
}

impl<T> AccessGuard<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            permission: None,
            role: None,
            fallback: None,
        }
    }

    pub fn require_permission(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }

    pub fn require_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Replace the standard denial view with custom content
    pub fn fallback(mut self, fallback: T) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn required_permission(&self) -> Option<&Permission> {
        self.permission.as_ref()
    }

    pub fn required_role(&self) -> Option<Role> {
        self.role
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    /// Evaluate the guard: authentication, then permission, then role
    pub fn decide(&self, session: &AuthSession) -> GuardDecision {
        let Some(user) = session.current_user() else {
            return GuardDecision::Denied(DenialReason::Unauthenticated);
        };

        if let Some(permission) = &self.permission {
            if !session.has_permission(permission) {
                return GuardDecision::Denied(DenialReason::MissingPermission(permission.clone()));
            }
        }

        if let Some(required) = self.role {
            if !session.has_role(required) {
                return GuardDecision::Denied(DenialReason::InsufficientRole {
                    required,
                    actual: user.role,
                });
            }
        }

        GuardDecision::Granted
    }

    /// Choose between the content and the fallback for this scope
    ///
    /// Fails only when the scope is not bound to a provider.
    pub fn render(self, scope: &AuthScope) -> Result<Guarded<T>> {
        let session = scope.session()?;

        match self.decide(session) {
            GuardDecision::Granted => Ok(Guarded::Content(self.content)),
            GuardDecision::Denied(reason) => {
                debug!("Access guard denied: {}", reason);
                Ok(match self.fallback {
                    Some(fallback) => Guarded::Fallback(fallback),
                    None => Guarded::Denied(AccessDeniedView::for_session(session)),
                })
            }
        }
    }
}
