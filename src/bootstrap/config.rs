//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `EVIDENCE_TRACKER_`. Refer to
//! the [configuration crate](evidence_tracker_configuration) for the
//! injection methods and the override variables.
use evidence_tracker_configuration::{Configuration, Error, Info};

/// Configuration file used when no other is given.
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/evidence-tracker.development.sqlite3.toml";

/// It loads the application configuration from the environment.
///
/// # Errors
///
/// Will return an error if the configuration cannot be found, parsed or
/// validated.
pub fn initialize_configuration() -> Result<Configuration, Error> {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string())?;

    Configuration::load(&info)
}
