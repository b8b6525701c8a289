//! Logic to run the HTTP API server.
//!
//! It contains two main structs: [`ApiServer`] and [`Launcher`].
//!
//! The `ApiServer` is a state machine. It is either `Stopped` or `Running`
//! and it can be started and stopped several times, always with the same
//! launcher.
//!
//! 1. `ApiServer::start` binds the socket and spawns a new task.
//! 2. `Launcher::start` serves the API on that task until it is halted.
//!
//! The main application starts the server once and keeps it running until
//! the process gets a shutdown signal. The integration tests start and stop
//! a server per test.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::Handle;
use derive_more::Constructor;
use evidence_tracker_located_error::{DynError, LocatedError};
use futures::future::BoxFuture;
use futures::{FutureExt as _, TryFutureExt as _};
use thiserror::Error;
use tokio::sync::oneshot::{self, Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::info;

use super::routes::router;
use crate::core::Registry;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Errors starting, running or stopping the API server.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to bind to socket {addr}: {err}")]
    UnableToBindToSocket {
        addr: SocketAddr,
        err: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    #[error("Unable to get the local address of the socket: {err}")]
    UnableToGetLocalAddress {
        err: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    #[error("Unable to serve the API: {err}")]
    UnableToServe {
        err: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    #[error("Unable to send the halting message, the server is already gone")]
    UnableToSendHaltingMessage,

    #[error("Unable to join the server task: {err}")]
    UnableToJoinTask {
        err: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
}

/// An API server controller.
#[allow(clippy::module_name_repetitions)]
pub struct ApiServer<S> {
    pub state: S,
}

/// A stopped API server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running API server state.
pub struct Running {
    /// The address the server is bound to.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: JoinHandle<Result<Launcher, Error>>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// Binds the socket and starts serving the API on a new task.
    ///
    /// It must be called within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Will return an error if the socket cannot be bound.
    pub fn start(self, registry: Arc<Registry>) -> Result<ApiServer<Running>, Error> {
        let (tx_halt, rx_halt) = oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let listener = launcher.bind()?;

        let binding = listener
            .local_addr()
            .map_err(|err| Error::UnableToGetLocalAddress {
                err: (Arc::new(err) as DynError).into(),
            })?;

        let running = launcher.start(listener, binding, registry, rx_halt);

        let task = tokio::spawn(async move {
            running.await?;

            Ok(launcher)
        });

        info!(target: "API", "API server started on: http://{binding}");

        Ok(ApiServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// Halts the server and waits for the open connections to drain.
    ///
    /// # Errors
    ///
    /// Will return an error if the server is already gone or it failed while
    /// serving.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::UnableToSendHaltingMessage)?;

        let launcher = self.state.task.await.map_err(|err| Error::UnableToJoinTask {
            err: (Arc::new(err) as DynError).into(),
        })??;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// Knows how to serve the API with graceful shutdown.
#[derive(Constructor, Debug, Clone, Copy)]
pub struct Launcher {
    bind_to: SocketAddr,
}

impl Launcher {
    fn bind(&self) -> Result<std::net::TcpListener, Error> {
        let listener = std::net::TcpListener::bind(self.bind_to).map_err(|err| Error::UnableToBindToSocket {
            addr: self.bind_to,
            err: (Arc::new(err) as DynError).into(),
        })?;

        listener.set_nonblocking(true).map_err(|err| Error::UnableToBindToSocket {
            addr: self.bind_to,
            err: (Arc::new(err) as DynError).into(),
        })?;

        Ok(listener)
    }

    /// Serves the API on the listener until the halt message arrives.
    fn start(
        &self,
        listener: std::net::TcpListener,
        binding: SocketAddr,
        registry: Arc<Registry>,
        rx_halt: Receiver<Halted>,
    ) -> BoxFuture<'static, Result<(), Error>> {
        let handle = Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down the API server on: http://{binding}"),
        ));

        axum_server::from_tcp(listener)
            .handle(handle)
            .serve(router(registry).into_make_service_with_connect_info::<SocketAddr>())
            .map_err(|err| Error::UnableToServe {
                err: (Arc::new(err) as DynError).into(),
            })
            .boxed()
    }
}
