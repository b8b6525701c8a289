//! Functions to handle process signals and server halting.
use std::time::Duration;

use derive_more::Display;
use tokio::sync::oneshot;
use tokio::time::sleep;
use tracing::{info, warn};

/// Time given to in-flight requests once a graceful shutdown starts.
const GRACE_PERIOD: Duration = Duration::from_secs(30);

/// Message the main process sends to a running server to stop it.
#[derive(Copy, Clone, Debug, Display)]
pub enum Halted {
    Normal,
}

/// Resolves on `ctrl_c` or the `terminate` signal.
///
/// If a signal handler cannot be installed the corresponding branch never
/// resolves and a warning is logged.
pub async fn global_shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!("Failed to install the terminate signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {}
    }
}

/// Resolves when the halt message arrives or on a global shutdown signal.
///
/// A dropped halt sender counts as a halt.
pub async fn shutdown_signal(rx_halt: oneshot::Receiver<Halted>) {
    let halt = async {
        match rx_halt.await {
            Ok(signal) => signal,
            Err(_) => Halted::Normal,
        }
    };

    tokio::select! {
        signal = halt => { info!("Halt signal processed: {}", signal) },
        () = global_shutdown_signal() => { info!("Global shutdown signal processed") }
    }
}

/// Same as `shutdown_signal()`, but logs a message when it resolves.
pub async fn shutdown_signal_with_message(rx_halt: oneshot::Receiver<Halted>, message: String) {
    shutdown_signal(rx_halt).await;

    info!("{message}");
}

/// Waits for the shutdown signal and then drains the server connections.
pub async fn graceful_shutdown(handle: axum_server::Handle, rx_halt: oneshot::Receiver<Halted>, message: String) {
    shutdown_signal_with_message(rx_halt, message).await;

    info!("Sending graceful shutdown signal");
    handle.graceful_shutdown(Some(GRACE_PERIOD));

    while handle.connection_count() > 0 {
        info!("remaining alive connections: {}", handle.connection_count());

        sleep(Duration::from_secs(1)).await;
    }
}
