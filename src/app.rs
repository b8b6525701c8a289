//! Evidence Tracker application.
//!
//! The application is a container for the jobs it runs. Currently it runs
//! only the REST API.
use std::sync::Arc;

use evidence_tracker_configuration::Configuration;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::http_api;
use crate::core::Registry;
use crate::servers::apis::server::Error;
use crate::servers::apis::Version;

/// Starts all the application jobs.
///
/// # Errors
///
/// Will return an error if a job cannot be started.
pub fn start(config: &Configuration, registry: Arc<Registry>) -> Result<Vec<JoinHandle<()>>, Error> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Start REST API
    jobs.push(http_api::start_job(&config.http_api, registry, Version::V1)?);

    Ok(jobs)
}
