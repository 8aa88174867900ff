//! Census Income Prediction Service - Main Entry Point

use anyhow::Context;
use api::{init_logging, run_server, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!(
        "=== Census Income Prediction Service v{} ===",
        env!("CARGO_PKG_VERSION")
    );

    let config = ServerConfig::load().context("failed to load configuration")?;
    run_server(config).await
}
