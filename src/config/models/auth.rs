//! Authorization configuration

use super::default_true;
use crate::auth::{Role, RoleCatalog};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Reject catalogs where a higher role lacks a lower role's grant
    #[serde(default = "default_true")]
    pub enforce_monotonic: bool,
    /// Per-role grants replacing the builtin catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grants: Option<HashMap<Role, Vec<String>>>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            enforce_monotonic: true,
            grants: None,
        }
    }
}

impl RbacConfig {
    /// Build the effective role catalog
    pub fn catalog(&self) -> Result<Arc<RoleCatalog>> {
        let catalog = match &self.grants {
            Some(grants) => Arc::new(RoleCatalog::from_grants(grants)),
            None => RoleCatalog::shared(),
        };

        if self.enforce_monotonic {
            catalog.check_monotonic()?;
        }

        Ok(catalog)
    }
}
