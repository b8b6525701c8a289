//! User roles.
//!
//! The set of roles is closed. Authorization rules are expressed as an
//! exhaustive mapping from protected action to allowed roles, so adding a
//! role here forces every rule to be revisited.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The role of a user.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Field technician (`tecnico`). Registers cases and evidence.
    Tecnico,
    /// Coordinator (`coordinador`). Reviews cases, deletes evidence and reads
    /// reports.
    Coordinador,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Tecnico, Role::Coordinador];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tecnico => "tecnico",
            Role::Coordinador => "coordinador",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
#[error("invalid role: \"{value}\", expected one of: tecnico, coordinador")]
pub struct ParseRoleError {
    pub value: String,
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError { value: s.to_string() })
    }
}
