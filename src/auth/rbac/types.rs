//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Access level assigned to a user
///
/// Declaration order is privilege order: every role outranks the ones
/// declared before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Read-only access
    Viewer,
    /// Day-to-day contributor
    Member,
    /// Team lead with approval rights
    Manager,
    /// Full administrative access
    Admin,
}

/// Named grant for a `resource:action` pair
///
/// Permissions are opaque tokens: the catalog decides which roles hold them,
/// and a token no role holds is simply never granted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub const DASHBOARD_READ: Permission = Permission::from_static("dashboard:read");

    pub const CLIENTS_READ: Permission = Permission::from_static("clients:read");
    pub const CLIENTS_WRITE: Permission = Permission::from_static("clients:write");
    pub const CLIENTS_DELETE: Permission = Permission::from_static("clients:delete");

    pub const PROJECTS_READ: Permission = Permission::from_static("projects:read");
    pub const PROJECTS_WRITE: Permission = Permission::from_static("projects:write");
    pub const PROJECTS_DELETE: Permission = Permission::from_static("projects:delete");

    pub const TIME_READ: Permission = Permission::from_static("time:read");
    pub const TIME_WRITE: Permission = Permission::from_static("time:write");
    pub const TIME_APPROVE: Permission = Permission::from_static("time:approve");

    pub const INVOICING_READ: Permission = Permission::from_static("invoicing:read");
    pub const INVOICING_WRITE: Permission = Permission::from_static("invoicing:write");
    pub const INVOICING_APPROVE: Permission = Permission::from_static("invoicing:approve");
    pub const INVOICING_DELETE: Permission = Permission::from_static("invoicing:delete");

    pub const REPORTS_READ: Permission = Permission::from_static("reports:read");
    pub const TEAM_MANAGE: Permission = Permission::from_static("team:manage");

    pub const ADMIN_SETTINGS: Permission = Permission::from_static("admin:settings");
    pub const ADMIN_USERS: Permission = Permission::from_static("admin:users");
    pub const ADMIN_AUDIT: Permission = Permission::from_static("admin:audit");

    /// Create a permission from a static token
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a permission from any token
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The full token, e.g. `clients:read`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resource half of the token (the whole token when it has no `:`)
    pub fn resource(&self) -> &str {
        self.0.split_once(':').map_or(&*self.0, |(resource, _)| resource)
    }

    /// Action half of the token
    pub fn action(&self) -> Option<&str> {
        self.0.split_once(':').map(|(_, action)| action)
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Permission {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Permission {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
