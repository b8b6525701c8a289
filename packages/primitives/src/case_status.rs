//! Case status and its state machine.
//!
//! ```text
//!             ┌──────────► aprobado ──┐
//! pendiente ──┤                       ├──► pendiente
//!             └──────────► rechazado ─┘
//! ```
//!
//! A case is created as `pendiente`. A coordinator can approve or reject a
//! pending case, and can send an approved or rejected case back to
//! `pendiente`. Every other transition, including a transition to the status
//! the case already has, is illegal.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The status of a case file (`estado`).
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pendiente,
    Aprobado,
    Rechazado,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 3] = [CaseStatus::Pendiente, CaseStatus::Aprobado, CaseStatus::Rechazado];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Pendiente => "pendiente",
            CaseStatus::Aprobado => "aprobado",
            CaseStatus::Rechazado => "rechazado",
        }
    }

    /// Comma separated list of the valid status names, in declaration order.
    #[must_use]
    pub fn valid_values() -> String {
        CaseStatus::ALL.map(|status| status.as_str()).join(", ")
    }

    /// Whether a case in this status can be moved to `next`.
    #[must_use]
    pub fn can_transition_to(self, next: CaseStatus) -> bool {
        matches!(
            (self, next),
            (CaseStatus::Pendiente, CaseStatus::Aprobado | CaseStatus::Rechazado)
                | (CaseStatus::Aprobado | CaseStatus::Rechazado, CaseStatus::Pendiente)
        )
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
#[error("invalid case status: \"{value}\"")]
pub struct ParseCaseStatusError {
    pub value: String,
}

impl FromStr for CaseStatus {
    type Err = ParseCaseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseCaseStatusError { value: s.to_string() })
    }
}
