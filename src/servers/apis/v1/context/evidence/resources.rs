//! API resources for the [`evidence`](crate::servers::apis::v1::context::evidence) API context.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::evidence;

/// A resource that represents an evidence item.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Evidence {
    pub id_indicio: i64,
    pub id_expediente: i64,
    pub descripcion: String,
    pub color: Option<String>,
    pub tamano: Option<String>,
    pub peso_libras: Option<String>,
    pub ubicacion: Option<String>,
    pub fecha_registro: NaiveDateTime,
}

impl From<evidence::Evidence> for Evidence {
    fn from(evidence: evidence::Evidence) -> Self {
        Self {
            id_indicio: evidence.id.0,
            id_expediente: evidence.case_id.0,
            descripcion: evidence.description,
            color: evidence.color,
            tamano: evidence.size,
            peso_libras: evidence.weight_in_pounds,
            ubicacion: evidence.location,
            fecha_registro: evidence.registered_at,
        }
    }
}

/// The answer to an evidence registration.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct EvidenceCreated {
    pub message: String,
    pub id_indicio: i64,
}
