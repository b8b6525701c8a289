use serde::{Deserialize, Serialize};

use crate::servers::apis::empty_string_as_none;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreateCaseForm {
    pub numero_expediente: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ChangeStatusForm {
    pub nuevo_estado: Option<String>,
    pub justificacion: Option<String>,
}

/// A container for the case filters in the URL query.
#[derive(Deserialize, Debug, Default)]
pub struct CaseFilterParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub fecha_inicio: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub fecha_fin: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub estado: Option<String>,
}
