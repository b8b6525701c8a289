use serde::{Deserialize, Serialize};

use super::database::Database;
use super::session::Session;

/// Core options shared by every service.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Core {
    /// External store configuration.
    #[serde(default)]
    pub database: Database,

    /// Session token configuration.
    #[serde(default)]
    pub session: Session,
}
