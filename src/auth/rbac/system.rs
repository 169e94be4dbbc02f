//! Role catalog core functionality

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info};

use super::types::{Permission, Role};

static SHARED_CATALOG: Lazy<Arc<RoleCatalog>> = Lazy::new(|| Arc::new(RoleCatalog::builtin()));

/// Immutable mapping from role to granted permissions
///
/// Grants are stored per rank. Nothing here mutates after construction, so a
/// catalog can be shared freely behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCatalog {
    /// Permission sets indexed by role rank
    pub(super) grants: [HashSet<Permission>; Role::COUNT],
}

impl RoleCatalog {
    /// Build the shipped catalog
    ///
    /// Each tier adds to the grants of the tier below it, so the result is
    /// monotonic by construction.
    pub fn builtin() -> Self {
        debug!("Building builtin role catalog");

        let tiers: [(Role, &[Permission]); Role::COUNT] = [
            (
                Role::Viewer,
                &[
                    Permission::DASHBOARD_READ,
                    Permission::CLIENTS_READ,
                    Permission::PROJECTS_READ,
                    Permission::TIME_READ,
                    Permission::INVOICING_READ,
                ],
            ),
            (
                Role::Member,
                &[
                    Permission::CLIENTS_WRITE,
                    Permission::PROJECTS_WRITE,
                    Permission::TIME_WRITE,
                ],
            ),
            (
                Role::Manager,
                &[
                    Permission::PROJECTS_DELETE,
                    Permission::TIME_APPROVE,
                    Permission::INVOICING_WRITE,
                    Permission::INVOICING_APPROVE,
                    Permission::REPORTS_READ,
                    Permission::TEAM_MANAGE,
                ],
            ),
            (
                Role::Admin,
                &[
                    Permission::CLIENTS_DELETE,
                    Permission::INVOICING_DELETE,
                    Permission::ADMIN_SETTINGS,
                    Permission::ADMIN_USERS,
                    Permission::ADMIN_AUDIT,
                ],
            ),
        ];

        let mut grants: [HashSet<Permission>; Role::COUNT] = Default::default();
        let mut cumulative = HashSet::new();
        for (role, added) in tiers {
            cumulative.extend(added.iter().cloned());
            grants[usize::from(role.rank())] = cumulative.clone();
        }

        let catalog = Self { grants };
        info!(
            "Role catalog ready with {} permissions",
            catalog.all_permissions().len()
        );
        catalog
    }

    /// Process-wide shared instance of the builtin catalog
    pub fn shared() -> Arc<RoleCatalog> {
        Arc::clone(&SHARED_CATALOG)
    }

    /// Build a catalog from explicit per-role grants
    ///
    /// Roles missing from `grants` are granted nothing. No monotonic check is
    /// performed here; see [`RoleCatalog::check_monotonic`].
    pub fn from_grants(grants: &HashMap<Role, Vec<String>>) -> Self {
        debug!("Building role catalog from {} role grant lists", grants.len());

        let mut table: [HashSet<Permission>; Role::COUNT] = Default::default();
        for (role, names) in grants {
            table[usize::from(role.rank())] = names.iter().cloned().map(Permission::new).collect();
        }

        Self { grants: table }
    }

    /// Iterate over every role with its grants, lowest rank first
    pub fn list_roles(&self) -> impl Iterator<Item = (Role, &HashSet<Permission>)> + '_ {
        Role::ALL
            .into_iter()
            .map(move |role| (role, &self.grants[usize::from(role.rank())]))
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
