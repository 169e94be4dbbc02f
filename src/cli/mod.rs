//! Command-line interface
//!
//! Argument parsing and command dispatch for the `opsdesk` binary. Command
//! output goes to the writer handed to [`execute`]; logs go to stderr.

use crate::auth::{AccessGuard, AuthProvider, AuthenticatedUser, Guarded, Permission, Role, RoleCatalog};
use crate::config::Config;
use crate::ui::visible_sections;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;


/// Exit code for a granted check
pub const GRANTED: u8 = 0;
/// Exit code for a denied check (clap reserves 2 for usage errors)
pub const DENIED: u8 = 3;

#[derive(Debug, Parser)]
#[command(name = "opsdesk", version, about = "Inspect OpsDesk roles and access decisions")]
pub struct Cli {
    /// Path to a YAML configuration file
    #[arg(long, short, env = "OPSDESK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every role with its rank and grants
    Roles {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Evaluate an access guard for a user
    #[command(after_help = "Exit status: 0 when access is granted, 3 when denied, 2 on usage errors.")]
    Check {
        #[command(flatten)]
        user: UserArgs,
        /// Required permission, e.g. clients:delete
        #[arg(long)]
        permission: Option<String>,
        /// Required minimum role
        #[arg(long)]
        require_role: Option<Role>,
    },
    /// List the navigation sections visible to a user
    Nav {
        #[command(flatten)]
        user: UserArgs,
    },
}

#[derive(Debug, Args)]
pub struct UserArgs {
    /// Role of the signed-in user
    #[arg(long, conflicts_with = "anonymous", required_unless_present = "anonymous")]
    pub role: Option<Role>,
    /// Evaluate with no signed-in user
    #[arg(long)]
    pub anonymous: bool,
    /// Display name of the user
    #[arg(long, default_value = "CLI User")]
    pub name: String,
}

impl UserArgs {
    fn into_user(self) -> Option<AuthenticatedUser> {
        if self.anonymous {
            return None;
        }
        self.role.map(|role| {
            AuthenticatedUser::new("cli", self.name, format!("{}@opsdesk.local", role), role)
        })
    }
}

/// Run `command` against `config`, writing its output to `out`
///
/// Returns the process exit code: [`GRANTED`] unless a check was denied.
pub fn execute<W: Write>(command: Command, config: &Config, out: &mut W) -> Result<u8> {
    let provider = AuthProvider::new(config.catalog()?);

    match command {
        Command::Roles { json } => {
            let table = roles_table(provider.catalog());
            if json {
                serde_json::to_writer_pretty(&mut *out, &table).map_err(io::Error::from)?;
                writeln!(out)?;
            } else {
                for (role, names) in table {
                    writeln!(
                        out,
                        "{} (rank {}): {}",
                        role,
                        provider.catalog().rank_of(role),
                        names.join(" ")
                    )?;
                }
            }
            Ok(GRANTED)
        }
        Command::Check {
            user,
            permission,
            require_role,
        } => {
            provider.set_user(user.into_user());

            let mut guard = AccessGuard::new("Access granted".to_string());
            if let Some(permission) = permission {
                guard = guard.require_permission(Permission::new(permission));
            }
            if let Some(role) = require_role {
                guard = guard.require_role(role);
            }
            debug!(
                "Checking permission={:?} role={:?}",
                guard.required_permission(),
                guard.required_role()
            );

            match guard.render(&provider.scope())? {
                Guarded::Content(text) => {
                    writeln!(out, "{}", text)?;
                    Ok(GRANTED)
                }
                Guarded::Fallback(text) => {
                    writeln!(out, "{}", text)?;
                    Ok(DENIED)
                }
                Guarded::Denied(view) => {
                    writeln!(out, "{}", view)?;
                    Ok(DENIED)
                }
            }
        }
        Command::Nav { user } => {
            provider.set_user(user.into_user());
            for section in visible_sections(&provider.scope())? {
                writeln!(out, "{:<14} {}", section.label(), section.path())?;
            }
            Ok(GRANTED)
        }
    }
}

/// Sorted grant names per role, lowest rank first
pub fn roles_table(catalog: &RoleCatalog) -> Vec<(Role, Vec<&str>)> {
    catalog
        .list_roles()
        .map(|(role, grants)| {
            let mut names: Vec<&str> = grants.iter().map(|p| p.as_str()).collect();
            names.sort_unstable();
            (role, names)
        })
        .collect()
}
