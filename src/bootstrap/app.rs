//! Setup for the main application.
use std::sync::Arc;

use evidence_tracker_configuration::{Configuration, Error};
use tracing::info;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::Registry;

/// It loads the configuration, sets up logging and builds the registry.
///
/// # Errors
///
/// Will return an error if the configuration cannot be loaded.
pub fn setup() -> Result<(Configuration, Arc<Registry>), Error> {
    let configuration = initialize_configuration()?;

    let registry = initialize_with_configuration(&configuration);

    Ok((configuration, registry))
}

/// It sets up logging and builds the registry. The store is not connected
/// until its first use.
#[must_use]
pub fn initialize_with_configuration(configuration: &Configuration) -> Arc<Registry> {
    initialize_logging(configuration);

    let mut safe_configuration = configuration.clone();
    safe_configuration.mask_secrets();
    info!("Configuration:\n{}", safe_configuration.to_json());

    Arc::new(Registry::new(&configuration.core))
}

fn initialize_logging(configuration: &Configuration) {
    bootstrap::logging::setup(&configuration.logging);
}
