//! HTTP API job starter.
//!
//! The [`http_api::start_job`](crate::bootstrap::jobs::http_api::start_job)
//! function starts the REST API server and returns a handle to a task that
//! completes when the server stops. The server stops on `ctrl_c` or the
//! `terminate` signal, after draining the open connections.
//!
//! Refer to the [configuration documentation](evidence_tracker_configuration)
//! for the API configuration options.
use std::sync::Arc;

use evidence_tracker_configuration::HttpApi;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::core::Registry;
use crate::servers::apis::server::{ApiServer, Error, Launcher};
use crate::servers::apis::Version;

/// This function starts a new API server with the provided configuration.
///
/// # Errors
///
/// Will return an error if the server cannot bind to the configured address.
pub fn start_job(config: &HttpApi, registry: Arc<Registry>, version: Version) -> Result<JoinHandle<()>, Error> {
    match version {
        Version::V1 => start_v1(config, registry),
    }
}

fn start_v1(config: &HttpApi, registry: Arc<Registry>) -> Result<JoinHandle<()>, Error> {
    let server = ApiServer::new(Launcher::new(config.bind_address)).start(registry)?;

    Ok(tokio::spawn(async move {
        // The server halts when its halt channel is dropped.
        let _halt_task = server.state.halt_task;

        match server.state.task.await {
            Ok(Ok(_launcher)) => info!(target: "API", "API server stopped"),
            Ok(Err(err)) => error!(target: "API", "API server failed: {err}"),
            Err(err) => error!(target: "API", "API server task failed: {err}"),
        }
    }))
}
