//! Program to provision users.
use evidence_tracker::console::user_admin::app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
