//! Collapsible sidebar state machine
//!
//! Three states driven by an explicit toggle and debounced hover input. The
//! caller passes the current time in, so the machine owns no timers.

use crate::config::SidebarConfig;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Visible state of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarState {
    /// Icons only
    #[default]
    Collapsed,
    /// Temporarily expanded while hovered
    Peek,
    /// Pinned open
    Expanded,
}

/// Sidebar state plus the pending hover timer
#[derive(Debug, Clone)]
pub struct Sidebar {
    state: SidebarState,
    hover_delay: Duration,
    hover_since: Option<Instant>,
}

impl Sidebar {
    pub fn new(hover_delay: Duration) -> Self {
        Self {
            state: SidebarState::Collapsed,
            hover_delay,
            hover_since: None,
        }
    }

    pub fn from_config(config: &SidebarConfig) -> Self {
        Self::new(config.hover_delay())
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn hover_delay(&self) -> Duration {
        self.hover_delay
    }

    /// Whether the full sidebar is showing
    pub fn is_visible(&self) -> bool {
        matches!(self.state, SidebarState::Peek | SidebarState::Expanded)
    }

    /// Whether a hover is waiting out the delay
    pub fn is_hover_pending(&self) -> bool {
        self.hover_since.is_some()
    }

    /// Pin open, or collapse when already pinned
    pub fn toggle(&mut self) -> SidebarState {
        self.hover_since = None;
        let next = match self.state {
            SidebarState::Collapsed | SidebarState::Peek => SidebarState::Expanded,
            SidebarState::Expanded => SidebarState::Collapsed,
        };
        self.transition(next)
    }

    /// Pointer entered the sidebar; arms the delay when collapsed
    pub fn hover_enter(&mut self, now: Instant) {
        if self.state == SidebarState::Collapsed && self.hover_since.is_none() {
            self.hover_since = Some(now);
        }
    }

    /// Pointer left the sidebar; cancels a pending peek and closes an open one
    pub fn hover_leave(&mut self) -> SidebarState {
        self.hover_since = None;
        if self.state == SidebarState::Peek {
            return self.transition(SidebarState::Collapsed);
        }
        self.state
    }

    /// Advance the hover timer
    pub fn tick(&mut self, now: Instant) -> SidebarState {
        if let Some(since) = self.hover_since {
            if now.saturating_duration_since(since) >= self.hover_delay {
                self.hover_since = None;
                return self.transition(SidebarState::Peek);
            }
        }
        self.state
    }

    fn transition(&mut self, next: SidebarState) -> SidebarState {
        if next != self.state {
            debug!("Sidebar {:?} -> {:?}", self.state, next);
            self.state = next;
        }
        self.state
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::from_config(&SidebarConfig::default())
    }
}
