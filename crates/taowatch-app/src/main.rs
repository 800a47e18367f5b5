//! taowatch gateway server - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

/// Subnet statistics gateway server
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via TAOWATCH_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    taowatch_app::logging::init_logging()?;

    info!("Starting taowatch v{}", env!("CARGO_PKG_VERSION"));

    let config = taowatch_app::AppConfig::load(args.config.as_deref())?;
    if !config.gateway.has_credential() {
        warn!("No upstream credential configured (set TAOWATCH_API_AUTH)");
    }
    info!(port = config.gateway.port, "Configuration loaded");

    taowatch_gateway::run_server(config.gateway).await?;

    Ok(())
}
