//! Evidence items (`indicios`) attached to a case file.
use chrono::NaiveDateTime;
use evidence_tracker_primitives::{CaseId, EvidenceId};

use super::non_blank;

/// An evidence item as stored.
///
/// Optional attributes are `None` when the technician did not provide them.
/// They are never empty strings.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Evidence {
    pub id: EvidenceId,
    pub case_id: CaseId,
    pub description: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub weight_in_pounds: Option<String>,
    pub location: Option<String>,
    pub registered_at: NaiveDateTime,
}

/// Data needed to register a new evidence item.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NewEvidence {
    pub case_id: CaseId,
    pub description: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub weight_in_pounds: Option<String>,
    pub location: Option<String>,
}

impl NewEvidence {
    /// Builds a new evidence item. Blank optional attributes become `None`,
    /// the rest are kept as sent.
    #[must_use]
    pub fn new(
        case_id: CaseId,
        description: &str,
        color: Option<String>,
        size: Option<String>,
        weight_in_pounds: Option<String>,
        location: Option<String>,
    ) -> Self {
        Self {
            case_id,
            description: description.to_string(),
            color: non_blank(color),
            size: non_blank(size),
            weight_in_pounds: non_blank(weight_in_pounds),
            location: non_blank(location),
        }
    }
}
