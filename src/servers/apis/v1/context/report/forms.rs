use serde::Deserialize;

use crate::servers::apis::empty_string_as_none;

/// A container for the report period in the URL query.
#[derive(Deserialize, Debug, Default)]
pub struct PeriodParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub fecha_inicio: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub fecha_fin: Option<String>,
}
