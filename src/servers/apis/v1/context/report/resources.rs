//! API resources for the [`report`](crate::servers::apis::v1::context::report) API context.
use evidence_tracker_primitives::CaseStatus;
use serde::{Deserialize, Serialize};

use crate::core::reports;

/// Number of cases in one status.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct StatusCount {
    pub estado: CaseStatus,
    pub cantidad: u64,
}

/// A resource that represents the case summary report.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct CaseSummary {
    pub total_registros: u64,
    pub detalle_por_estado: Vec<StatusCount>,
}

impl From<reports::CaseSummary> for CaseSummary {
    fn from(summary: reports::CaseSummary) -> Self {
        Self {
            total_registros: summary.total,
            detalle_por_estado: summary
                .by_status
                .into_iter()
                .map(|group| StatusCount {
                    estado: group.status,
                    cantidad: group.count,
                })
                .collect(),
        }
    }
}
