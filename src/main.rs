use evidence_tracker::servers::signals::global_shutdown_signal;
use evidence_tracker::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, registry) = bootstrap::app::setup()?;

    let jobs = app::start(&config, registry)?;

    // handle the signals
    global_shutdown_signal().await;

    info!("Evidence tracker shutting down..");

    // Await for all jobs to shutdown
    futures::future::join_all(jobs).await;

    info!("Evidence tracker successfully shutdown.");

    Ok(())
}
