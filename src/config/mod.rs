//! Configuration management
//!
//! This module handles loading, validation, and management of all configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::auth::RoleCatalog;
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Role catalog settings
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Sidebar settings
    #[serde(default)]
    pub sidebar: SidebarConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Catalog built by `validate`, with the RBAC settings it was built from
    #[serde(skip)]
    checked: OnceCell<(RbacConfig, Arc<RoleCatalog>)>,
}

impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.rbac == other.rbac && self.sidebar == other.sidebar && self.logging == other.logging
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `OPSDESK_*` environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("OPSDESK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("OPSDESK_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }
        if let Some(delay) = lookup("OPSDESK_HOVER_DELAY_MS") {
            self.sidebar.hover_delay_ms = delay
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid hover delay: {}", e)))?;
        }
        if let Some(enforce) = lookup("OPSDESK_ENFORCE_MONOTONIC") {
            self.rbac.enforce_monotonic = enforce
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid monotonic flag: {}", e)))?;
        }
        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.rbac
            .validate()
            .map_err(|e| AccessError::Config(format!("RBAC config error: {}", e)))?;

        self.sidebar
            .validate()
            .map_err(|e| AccessError::Config(format!("Sidebar config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| AccessError::Config(format!("Logging config error: {}", e)))?;

        // Overrides must still form a usable catalog
        let catalog = self.rbac.catalog()?;
        let _ = self.checked.set((self.rbac.clone(), catalog));

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Effective role catalog
    ///
    /// Reuses the catalog checked by `validate` unless the RBAC settings
    /// changed since.
    pub fn catalog(&self) -> Result<Arc<RoleCatalog>> {
        let catalog = match self.checked.get() {
            Some((rbac, catalog)) if *rbac == self.rbac => Arc::clone(catalog),
            _ => self.rbac.catalog()?,
        };

        if !self.rbac.enforce_monotonic && self.rbac.grants.is_some() {
            warn!("Role catalog monotonicity is not enforced; higher roles may lack lower-role grants");
        }

        Ok(catalog)
    }
}
