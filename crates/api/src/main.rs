//! Climate Observation API - Main Entry Point

use api::{init_logging, run_server, AppConfig};
use clap::Parser;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "climate-api", version, about = "Serve the climate observation dataset over HTTP")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.debug |= cli.debug;

    init_logging(config.debug);
    info!("Dataset: {}", config.database_path.display());

    run_server(&config).await?;

    Ok(())
}
