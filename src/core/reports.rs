//! Aggregated views over case files.
use evidence_tracker_primitives::CaseStatus;

/// Number of cases in one status.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct StatusCount {
    pub status: CaseStatus,
    pub count: u64,
}

/// Case counts grouped by status.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CaseSummary {
    /// Sum of the counts of all the groups.
    pub total: u64,
    pub by_status: Vec<StatusCount>,
}

impl From<Vec<StatusCount>> for CaseSummary {
    fn from(by_status: Vec<StatusCount>) -> Self {
        let total = by_status.iter().map(|group| group.count).sum();

        Self { total, by_status }
    }
}
