use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::DEFAULT_SESSION_LIFETIME;

/// Session token settings.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Session {
    /// Secret used to sign and verify session tokens (HS256). It must be set,
    /// there is no usable default.
    #[serde(default = "Session::default_secret")]
    pub secret: String,

    /// Number of seconds a session token stays valid after it is issued.
    #[serde(default = "Session::default_lifetime")]
    pub lifetime: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            secret: Self::default_secret(),
            lifetime: Self::default_lifetime(),
        }
    }
}

impl Session {
    fn default_secret() -> String {
        String::new()
    }

    fn default_lifetime() -> u64 {
        DEFAULT_SESSION_LIFETIME.as_secs()
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        Duration::from_secs(self.lifetime)
    }

    pub fn mask_secrets(&mut self) {
        "***".clone_into(&mut self.secret);
    }
}
