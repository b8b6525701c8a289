//! Configuration data structures for the evidence tracker.
//!
//! The current version of the configuration is [`v1`].
//!
//! The configuration is injected in one of two ways, in order of priority:
//!
//! 1. The whole TOML content in the `EVIDENCE_TRACKER_CONFIG_TOML`
//!    environment variable.
//! 2. A TOML file. Its path is taken from `EVIDENCE_TRACKER_CONFIG_TOML_PATH`
//!    or, if that variable is not set, from the default path passed to
//!    [`Info::new`].
//!
//! Any single option can then be overridden with an environment variable
//! prefixed with `EVIDENCE_TRACKER_CONFIG_OVERRIDE_`, using `__` to separate
//! nested keys. For example:
//!
//! ```text
//! EVIDENCE_TRACKER_CONFIG_OVERRIDE_CORE__SESSION__SECRET=MySecret
//! ```
pub mod v1;
pub mod validator;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use evidence_tracker_located_error::{DynError, LocatedError};
use thiserror::Error;

/// Default timeout for a single call to the store.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default session lifetime: 8 hours.
pub const DEFAULT_SESSION_LIFETIME: Duration = Duration::from_secs(8 * 60 * 60);

// Environment variables

/// The whole configuration TOML content. It has priority over the config file.
const ENV_VAR_CONFIG_TOML: &str = "EVIDENCE_TRACKER_CONFIG_TOML";

/// The configuration TOML file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "EVIDENCE_TRACKER_CONFIG_TOML_PATH";

/// Prefix for the environment variables that override single options.
pub const CONFIG_OVERRIDE_PREFIX: &str = "EVIDENCE_TRACKER_CONFIG_OVERRIDE_";

/// Separator for nested keys in override environment variables.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;
pub type LogStyle = v1::logging::Style;
pub type Core = v1::core::Core;
pub type Database = v1::database::Database;
pub type Session = v1::session::Session;
pub type HttpApi = v1::http_api::HttpApi;

/// Information required for loading the configuration.
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Builds the configuration info from the environment.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable `{ENV_VAR_CONFIG_TOML}` ...");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }

    /// Info for a configuration given directly as TOML content.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: String::new(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to load the configuration from the configuration file.
    #[error("Failed processing the configuration: {source}")]
    ConfigError {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    /// The configuration loaded but its values are not consistent.
    #[error("The configuration is not valid: {source}")]
    SemanticValidation {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: (Arc::new(err) as DynError).into(),
        }
    }
}

impl From<validator::SemanticValidationError> for Error {
    #[track_caller]
    fn from(err: validator::SemanticValidationError) -> Self {
        Self::SemanticValidation {
            source: (Arc::new(err) as DynError).into(),
        }
    }
}
