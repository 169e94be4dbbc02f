//! Sidebar navigation sections and their access requirements

use crate::auth::{AccessGuard, AuthScope, Permission};
use crate::utils::error::Result;
use serde::Serialize;
use tracing::debug;

/// Top-level section of the application shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavSection {
    Dashboard,
    Clients,
    Projects,
    TimeTracking,
    Invoicing,
    Reports,
    Settings,
}

impl NavSection {
    /// Every section in sidebar order
    pub const ALL: [NavSection; 7] = [
        NavSection::Dashboard,
        NavSection::Clients,
        NavSection::Projects,
        NavSection::TimeTracking,
        NavSection::Invoicing,
        NavSection::Reports,
        NavSection::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Dashboard => "Dashboard",
            NavSection::Clients => "Clients",
            NavSection::Projects => "Projects",
            NavSection::TimeTracking => "Time Tracking",
            NavSection::Invoicing => "Invoicing",
            NavSection::Reports => "Reports",
            NavSection::Settings => "Settings",
        }
    }

    /// Route prefix of the section
    pub fn path(self) -> &'static str {
        match self {
            NavSection::Dashboard => "/dashboard",
            NavSection::Clients => "/clients",
            NavSection::Projects => "/projects",
            NavSection::TimeTracking => "/time",
            NavSection::Invoicing => "/invoicing",
            NavSection::Reports => "/reports",
            NavSection::Settings => "/settings",
        }
    }

    pub fn required_permission(self) -> Permission {
        match self {
            NavSection::Dashboard => Permission::DASHBOARD_READ,
            NavSection::Clients => Permission::CLIENTS_READ,
            NavSection::Projects => Permission::PROJECTS_READ,
            NavSection::TimeTracking => Permission::TIME_READ,
            NavSection::Invoicing => Permission::INVOICING_READ,
            NavSection::Reports => Permission::REPORTS_READ,
            NavSection::Settings => Permission::ADMIN_SETTINGS,
        }
    }

    /// Guard protecting this section
    pub fn guard(self) -> AccessGuard<NavSection> {
        AccessGuard::new(self).require_permission(self.required_permission())
    }
}

/// Sections the scope's session may open, in sidebar order
pub fn visible_sections(scope: &AuthScope) -> Result<Vec<NavSection>> {
    let mut visible = Vec::with_capacity(NavSection::ALL.len());
    for section in NavSection::ALL {
        if let Some(section) = section.guard().render(scope)?.into_content() {
            visible.push(section);
        }
    }

    debug!("{} of {} sections visible", visible.len(), NavSection::ALL.len());
    Ok(visible)
}

/// Section owning a route; `/` resolves to the dashboard
pub fn section_for_path(path: &str) -> Option<NavSection> {
    if path == "/" {
        return Some(NavSection::Dashboard);
    }

    NavSection::ALL.into_iter().find(|section| {
        let prefix = section.path();
        path == prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}
