//! Role-based permissions.
//!
//! Every protected route is bound to one [`Action`]. The roles allowed to
//! perform each action are:
//!
//! Action | `tecnico` | `coordinador`
//! ---|---|---
//! `CreateCase`, `ListCases`, `GetCase` | yes | yes
//! `ChangeCaseStatus` | no | yes
//! `CreateEvidence`, `ListEvidence`, `GetEvidence` | yes | yes
//! `DeleteEvidence` | no | yes
//! `CaseSummaryReport`, `CaseDetailReport` | no | yes
use std::panic::Location;

use evidence_tracker_primitives::Role;
use thiserror::Error;

const ANY_ROLE: &[Role] = &[Role::Tecnico, Role::Coordinador];
const COORDINATOR_ONLY: &[Role] = &[Role::Coordinador];

/// A protected operation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    CreateCase,
    ListCases,
    GetCase,
    ChangeCaseStatus,
    CreateEvidence,
    ListEvidence,
    GetEvidence,
    DeleteEvidence,
    CaseSummaryReport,
    CaseDetailReport,
}

impl Action {
    /// The roles allowed to perform the action.
    #[must_use]
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Action::CreateCase
            | Action::ListCases
            | Action::GetCase
            | Action::CreateEvidence
            | Action::ListEvidence
            | Action::GetEvidence => ANY_ROLE,
            Action::ChangeCaseStatus | Action::DeleteEvidence | Action::CaseSummaryReport | Action::CaseDetailReport => {
                COORDINATOR_ONLY
            }
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("The role {role} is not allowed to perform {action:?}, {location}")]
    ActionNotAllowed {
        role: Role,
        action: Action,
        location: &'static Location<'static>,
    },
}

/// Checks the role may perform the action.
///
/// # Errors
///
/// Will return `Error::ActionNotAllowed` if the role is not in the allowed
/// set of the action.
#[track_caller]
pub fn authorize(role: Role, action: Action) -> Result<(), Error> {
    if action.allowed_roles().contains(&role) {
        Ok(())
    } else {
        Err(Error::ActionNotAllowed {
            role,
            action,
            location: Location::caller(),
        })
    }
}
