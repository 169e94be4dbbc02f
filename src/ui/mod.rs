//! Application shell models
//!
//! Navigation gating and the sidebar state machine. Rendering itself belongs
//! to the host.

pub mod navigation;
pub mod sidebar;

pub use navigation::{NavSection, section_for_path, visible_sections};
pub use sidebar::{Sidebar, SidebarState};
