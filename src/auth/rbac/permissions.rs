//! Permission lookup methods

use crate::utils::error::{AccessError, Result};
use std::collections::HashSet;
use tracing::debug;

use super::system::RoleCatalog;
use super::types::{Permission, Role};

impl RoleCatalog {
    /// Permissions granted to a role
    pub fn permissions_for(&self, role: Role) -> &HashSet<Permission> {
        &self.grants[usize::from(self.rank_of(role))]
    }

    /// Permissions granted to a role given by name
    pub fn permissions_for_name(&self, role_name: &str) -> Result<&HashSet<Permission>> {
        let role = role_name
            .parse::<Role>()
            .map_err(|_| AccessError::config(format!("Unrecognized role: {}", role_name)))?;
        Ok(self.permissions_for(role))
    }

    /// Check if a role holds a permission
    pub fn role_has_permission(&self, role: Role, permission: &Permission) -> bool {
        self.permissions_for(role).contains(permission)
    }

    /// Roles holding a permission, lowest rank first
    pub fn grants_of(&self, permission: &Permission) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.role_has_permission(*role, permission))
            .collect()
    }

    /// Union of every role's grants
    pub fn all_permissions(&self) -> HashSet<&Permission> {
        self.grants.iter().flatten().collect()
    }

    /// Verify that every role holds all grants of the roles ranked below it
    pub fn check_monotonic(&self) -> Result<()> {
        debug!("Checking role catalog monotonicity");

        for pair in Role::ALL.windows(2) {
            let (lower, higher) = (pair[0], pair[1]);
            let higher_grants = self.permissions_for(higher);

            let mut missing: Vec<&Permission> = self
                .permissions_for(lower)
                .iter()
                .filter(|permission| !higher_grants.contains(*permission))
                .collect();

            if !missing.is_empty() {
                missing.sort_by(|a, b| a.as_str().cmp(b.as_str()));
                return Err(AccessError::config(format!(
                    "Role '{}' lacks permission '{}' granted to lower role '{}'",
                    higher, missing[0], lower
                )));
            }
        }

        Ok(())
    }
}
