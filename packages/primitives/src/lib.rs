//! Primitive types for the evidence tracker.
//!
//! These types are shared by the main crate and by the configuration and
//! test-helper packages: identifiers of the persisted records, the closed set
//! of user roles, the closed set of case statuses and the store driver kind.
use std::time::Duration;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

pub mod case_status;
pub mod role;

pub use case_status::CaseStatus;
pub use role::Role;

/// Duration since the Unix Epoch.
pub type DurationSinceUnixEpoch = Duration;

/// The store driver. Possible values are `Sqlite3` and `MySQL`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Hash, Display)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDriver {
    /// The embedded `SQLite3` store, used for development and tests.
    Sqlite3,
    /// The `MySQL` store, where the business rules live in stored procedures.
    #[serde(rename = "mysql")]
    MySQL,
}

/// Identifier of a user (`id_usuario`).
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash, Display, From)]
#[serde(transparent)]
pub struct UserId(pub i64);

/// Identifier of a case file (`id_expediente`).
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash, Display, From)]
#[serde(transparent)]
pub struct CaseId(pub i64);

/// Identifier of an evidence item (`id_indicio`).
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash, Display, From)]
#[serde(transparent)]
pub struct EvidenceId(pub i64);

/// Error returned when a record identifier cannot be parsed from a path
/// segment.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
#[error("invalid record id: \"{value}\", expected a positive integer")]
pub struct ParseIdError {
    pub value: String,
}

macro_rules! impl_from_str_for_id {
    ($id:ty) => {
        impl std::str::FromStr for $id {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.parse::<i64>() {
                    Ok(value) if value > 0 => Ok(Self(value)),
                    _ => Err(ParseIdError { value: s.to_string() }),
                }
            }
        }
    };
}

impl_from_str_for_id!(UserId);
impl_from_str_for_id!(CaseId);
impl_from_str_for_id!(EvidenceId);
