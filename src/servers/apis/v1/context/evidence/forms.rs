use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::services::evidence::EvidenceAttributes;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreateEvidenceForm {
    pub descripcion: Option<String>,
    pub color: Option<String>,
    pub tamano: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub peso_libras: Option<String>,
    pub ubicacion: Option<String>,
}

impl From<CreateEvidenceForm> for EvidenceAttributes {
    fn from(form: CreateEvidenceForm) -> Self {
        Self {
            description: form.descripcion,
            color: form.color,
            size: form.tamano,
            weight_in_pounds: form.peso_libras,
            location: form.ubicacion,
        }
    }
}

/// Accepts a string or a JSON number and keeps it as text.
fn string_or_number<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(de)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(Value::Number(value)) => Ok(Some(value.to_string())),
        Some(other) => Err(de::Error::custom(format!("expected a string or a number, found {other}"))),
    }
}
