//! API resources for the [`health_check`](crate::servers::apis::v1::context::health_check)
//! API context.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Report {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: Status::Ok,
            db: Some(true),
            message: None,
        }
    }

    #[must_use]
    pub fn unhealthy(message: &str) -> Self {
        Self {
            status: Status::Error,
            db: None,
            message: Some(message.to_string()),
        }
    }
}
