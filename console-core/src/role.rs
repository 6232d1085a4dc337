//! The closed set of user roles.
//!
//! DESIGN
//! ======
//! Every role-keyed decision (menus, dashboards, report kinds, guard
//! allow-lists) matches exhaustively on [`Role`], so adding or removing a role
//! is a compile-time change rather than a missing lookup-table entry.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three fixed user categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Supreme administrator: manages users, reports, and punishments.
    Andrei,
    /// Operator who captures network admins and files capture reports.
    Daemon,
    /// Resistance member: files intel and reads the survival material.
    NetworkAdmin,
}

/// Returned when a string does not name a known role.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// All roles, in menu order.
    pub const ALL: [Role; 3] = [Role::Andrei, Role::Daemon, Role::NetworkAdmin];

    /// Wire value used by the backend (`andrei`, `daemon`, `network_admin`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Andrei => "andrei",
            Self::Daemon => "daemon",
            Self::NetworkAdmin => "network_admin",
        }
    }

    /// Sidebar heading shown for this role.
    #[must_use]
    pub fn console_title(self) -> &'static str {
        match self {
            Self::Andrei => "ANDREI SUPREME COMMAND",
            Self::Daemon => "DAEMON OPERATIONS",
            Self::NetworkAdmin => "RESISTANCE NETWORK",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "andrei" => Ok(Self::Andrei),
            "daemon" => Ok(Self::Daemon),
            "network_admin" => Ok(Self::NetworkAdmin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}
