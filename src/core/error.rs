//! Errors returned by the core services.
//!
//! Error | Context | Description
//! ---|---|---
//! `MissingCredentials` | Login | Email or password missing or blank.
//! `MissingCaseNumber` | Cases | Case number missing or blank.
//! `MissingEvidenceDescription` | Evidence | Description missing or blank.
//! `InvalidStatus` | Cases, Reports | Not one of `pendiente`, `aprobado`, `rechazado`.
//! `InvalidDate` | Cases, Reports | A date filter is not a valid date.
//! `InvalidCredentials` | Login | Unknown email or wrong password.
//! `CaseNotFound` | Cases | No case with the given id.
//! `EvidenceNotFound` | Evidence | No evidence item with the given id.
//! `IllegalTransition` | Cases | The review transition is not allowed.
//! `Upstream` | Any | The store failed.
//! `Timeout` | Any | The store did not answer in time.
//!
//! All the input errors are detected before calling the store.
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use evidence_tracker_located_error::{DynError, LocatedError};
use evidence_tracker_primitives::{CaseId, CaseStatus, EvidenceId};

use super::period::ParsePeriodError;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    // Input errors
    #[error("Email and password are required, {location}")]
    MissingCredentials { location: &'static Location<'static> },
    #[error("The case number is required, {location}")]
    MissingCaseNumber { location: &'static Location<'static> },
    #[error("The evidence description is required, {location}")]
    MissingEvidenceDescription { location: &'static Location<'static> },
    #[error("Invalid case status: {value:?}, {location}")]
    InvalidStatus {
        value: String,
        location: &'static Location<'static>,
    },
    #[error("Invalid date filter: {source}, {location}")]
    InvalidDate {
        source: ParsePeriodError,
        location: &'static Location<'static>,
    },

    // Authentication errors
    #[error("Invalid credentials, {location}")]
    InvalidCredentials { location: &'static Location<'static> },

    // Resource errors
    #[error("Case {case_id} not found, {location}")]
    CaseNotFound {
        case_id: CaseId,
        location: &'static Location<'static>,
    },
    #[error("Evidence item {evidence_id} not found, {location}")]
    EvidenceNotFound {
        evidence_id: EvidenceId,
        location: &'static Location<'static>,
    },
    #[error("Case {case_id} cannot go from {from} to {to}, {location}")]
    IllegalTransition {
        case_id: CaseId,
        from: CaseStatus,
        to: CaseStatus,
        location: &'static Location<'static>,
    },

    // Store errors
    #[error("The store failed: {source}")]
    Upstream {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
    #[error("The store did not answer within {timeout:?}, {location}")]
    Timeout {
        timeout: Duration,
        location: &'static Location<'static>,
    },
}

impl Error {
    /// Wraps any failure of the store or of the infrastructure around it.
    #[track_caller]
    pub fn upstream<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Upstream {
            source: (Arc::new(err) as DynError).into(),
        }
    }
}

impl From<super::databases::error::Error> for Error {
    #[track_caller]
    fn from(err: super::databases::error::Error) -> Self {
        Self::upstream(err)
    }
}
