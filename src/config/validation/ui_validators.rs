//! Application shell configuration validators

use super::Validate;
use crate::config::models::SidebarConfig;

impl Validate for SidebarConfig {
    fn validate(&self) -> Result<(), String> {
        if self.hover_delay_ms == 0 {
            return Err("Sidebar hover delay must be greater than 0".to_string());
        }

        if self.hover_delay_ms > 5000 {
            return Err("Sidebar hover delay should not exceed 5000 ms".to_string());
        }

        Ok(())
    }
}
