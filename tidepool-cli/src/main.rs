//! Tidepool CLI - search relay entry point
//!
//! Loads configuration from the environment, applies flag overrides, and
//! runs the relay server.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tidepool_web::{RelayConfig, run_server};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tidepool")]
#[command(about = "A search relay and static frontend server")]
struct Cli {
    /// Listen port (overrides the PORT environment variable)
    #[arg(long)]
    port: Option<u16>,

    /// Static asset root (overrides the STATIC_DIR environment variable)
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = RelayConfig::from_env();
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(static_dir) = cli.static_dir {
        config.static_root = static_dir;
    }

    run_server(config).await.context("relay server failed")?;

    Ok(())
}
