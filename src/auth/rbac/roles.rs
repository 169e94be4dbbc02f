//! Role ranking and naming

use crate::utils::error::{AccessError, Result};

use super::system::RoleCatalog;
use super::types::Role;

impl Role {
    /// Number of roles
    pub const COUNT: usize = 4;

    /// Every role, lowest rank first
    pub const ALL: [Role; Role::COUNT] = [Role::Viewer, Role::Member, Role::Manager, Role::Admin];

    /// Position in the privilege order
    pub const fn rank(self) -> u8 {
        match self {
            Role::Viewer => 0,
            Role::Member => 1,
            Role::Manager => 2,
            Role::Admin => 3,
        }
    }

    /// Lowercase role name
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Member => "member",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "viewer" => Ok(Role::Viewer),
            "member" => Ok(Role::Member),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            _ => Err(AccessError::validation(format!("Invalid role: {}", s))),
        }
    }
}

impl RoleCatalog {
    /// Rank of a role: viewer=0, member=1, manager=2, admin=3
    pub fn rank_of(&self, role: Role) -> u8 {
        role.rank()
    }

    /// Role at a given rank
    pub fn role_at(&self, rank: u8) -> Option<Role> {
        Role::ALL.get(usize::from(rank)).copied()
    }

    /// Whether `held` meets a requirement for `required`
    pub fn outranks_or_equals(&self, held: Role, required: Role) -> bool {
        self.rank_of(held) >= self.rank_of(required)
    }
}
