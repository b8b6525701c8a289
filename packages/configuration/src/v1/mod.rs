//! Version `1` of the evidence tracker configuration.
//!
//! # Sections
//!
//! Section | Structure | Description
//! ---|---|---
//! `[logging]` | [`Logging`](crate::v1::logging::Logging) | Logging threshold and format
//! `[core.database]` | [`Database`](crate::v1::database::Database) | External store connection
//! `[core.session]` | [`Session`](crate::v1::session::Session) | Session token signing and lifetime
//! `[http_api]` | [`HttpApi`](crate::v1::http_api::HttpApi) | HTTP API bind address
//!
//! # Default configuration
//!
//! ```toml
//! [logging]
//! threshold = "info"
//! style = "default"
//!
//! [core.database]
//! driver = "sqlite3"
//! path = "./storage/evidence-tracker/lib/database/sqlite3.db"
//! timeout = 5
//!
//! [core.session]
//! secret = ""
//! lifetime = 28800
//!
//! [http_api]
//! bind_address = "0.0.0.0:3001"
//! ```
//!
//! The default session secret is empty on purpose: the application refuses
//! to start until one is configured.
pub mod core;
pub mod database;
pub mod http_api;
pub mod logging;
pub mod session;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::core::Core;
use self::http_api::HttpApi;
use self::logging::Logging;
use crate::validator::{SemanticValidationError, Validator};
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Root configuration.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// Core configuration.
    #[serde(default)]
    pub core: Core,

    /// The HTTP API configuration.
    #[serde(default)]
    pub http_api: HttpApi,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct and applies the
    /// environment variable overrides.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration cannot be parsed or it is not
    /// semantically valid.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::from(Toml::string(config_toml))
        } else {
            Figment::from(Toml::file(&info.config_toml_path))
        };

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        config.validate()?;

        Ok(config)
    }

    /// Loads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `path` has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let info = Info {
            config_toml: None,
            config_toml_path: path.to_owned(),
        };

        Self::load(&info)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be encoded. All the sections
    /// are plain data so this only happens on a programming error.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }

    /// Encodes the configuration to JSON.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be encoded.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("Could not encode JSON value")
    }

    /// Replaces the secrets with `***` so the configuration can be logged.
    pub fn mask_secrets(&mut self) {
        self.core.session.mask_secrets();
        self.core.database.mask_secrets();
    }
}

impl Validator for Configuration {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        if self.core.session.secret.trim().is_empty() {
            return Err(SemanticValidationError::EmptySessionSecret);
        }

        if self.core.session.lifetime == 0 {
            return Err(SemanticValidationError::ZeroSessionLifetime);
        }

        if self.core.database.timeout == 0 {
            return Err(SemanticValidationError::ZeroStoreTimeout);
        }

        if self.core.database.path.trim().is_empty() {
            return Err(SemanticValidationError::EmptyDatabasePath);
        }

        Ok(())
    }
}
