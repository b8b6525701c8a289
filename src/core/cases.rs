//! Case files (`expedientes`).
//!
//! A case is registered by a technician and starts as
//! [`CaseStatus::Pendiente`]. A coordinator then approves or rejects it, and
//! can send it back to pending review. The legal transitions are defined by
//! [`CaseStatus::can_transition_to`].
use chrono::NaiveDateTime;
use evidence_tracker_primitives::{CaseId, CaseStatus, UserId};

use super::period::Period;

/// A case file as stored.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Case {
    pub id: CaseId,
    /// Human readable case number, for example `MP-0001`. Unique.
    pub number: String,
    pub status: CaseStatus,
    /// The technician who registered the case.
    pub registered_by: UserId,
    pub registered_at: NaiveDateTime,
    /// Justification given by the coordinator on the last status change.
    pub justification: Option<String>,
}

/// Data needed to register a new case.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NewCase {
    pub number: String,
    pub registered_by: UserId,
}

/// A review decision over a case.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StatusChange {
    pub case_id: CaseId,
    pub new_status: CaseStatus,
    pub justification: Option<String>,
    /// The coordinator who takes the decision.
    pub acting_user: UserId,
}

/// Filters for case listings and detail reports.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct CaseFilter {
    pub period: Period,
    pub status: Option<CaseStatus>,
}
