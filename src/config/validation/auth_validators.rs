//! Authorization configuration validators

use super::Validate;
use crate::config::models::RbacConfig;
use std::collections::HashSet;
use tracing::debug;

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating RBAC configuration");

        let Some(grants) = &self.grants else {
            return Ok(());
        };

        for (role, permissions) in grants {
            let mut seen = HashSet::new();
            for permission in permissions {
                if permission.trim().is_empty() {
                    return Err(format!("Role '{}' has an empty permission", role));
                }
                if permission.chars().any(char::is_whitespace) {
                    return Err(format!(
                        "Permission '{}' of role '{}' must not contain whitespace",
                        permission, role
                    ));
                }
                if !seen.insert(permission.as_str()) {
                    return Err(format!(
                        "Duplicate permission '{}' for role '{}'",
                        permission, role
                    ));
                }
            }
        }

        Ok(())
    }
}
