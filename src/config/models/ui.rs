//! Application shell configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sidebar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Hover time before a collapsed sidebar peeks open
    #[serde(default = "default_hover_delay_ms")]
    pub hover_delay_ms: u64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            hover_delay_ms: default_hover_delay_ms(),
        }
    }
}

impl SidebarConfig {
    pub fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.hover_delay_ms)
    }
}

fn default_hover_delay_ms() -> u64 {
    300
}
