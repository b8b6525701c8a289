//! API resources for the [`case`](crate::servers::apis::v1::context::case) API context.
use chrono::NaiveDateTime;
use evidence_tracker_primitives::CaseStatus;
use serde::{Deserialize, Serialize};

use crate::core::cases;

/// A resource that represents a case file.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Case {
    pub id_expediente: i64,
    pub numero_expediente: String,
    pub estado: CaseStatus,
    /// The technician who registered the case.
    pub id_tecnico_registra: i64,
    pub fecha_registro: NaiveDateTime,
    /// Set when a coordinator rejects the case.
    pub justificacion_rechazo: Option<String>,
}

impl From<cases::Case> for Case {
    fn from(case: cases::Case) -> Self {
        Self {
            id_expediente: case.id.0,
            numero_expediente: case.number,
            estado: case.status,
            id_tecnico_registra: case.registered_by.0,
            fecha_registro: case.registered_at,
            justificacion_rechazo: case.justification,
        }
    }
}

/// The answer to a case creation.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CaseCreated {
    pub message: String,
    pub id_expediente: i64,
}
