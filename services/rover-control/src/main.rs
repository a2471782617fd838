//! Rover Control CLI
//!
//! Command-line interface for the rover control panel.

use std::path::PathBuf;

use clap::Parser;
use rover_control::Config;
use rover_core::load_config;
use tracing::Level;

#[derive(Parser)]
#[command(name = "rover-control")]
#[command(about = "Send commands to the rover and show its recent history")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Record store URL (overrides config file)
    #[arg(long)]
    store_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, store_url={:?}, log_level={:?}",
        args.config,
        args.store_url,
        args.log_level
    );

    let mut config: Config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(store_url) = args.store_url {
        config.store.base_url = store_url;
    }

    tracing::info!("Starting rover control panel against {}", config.store.base_url);
    rover_control::run(config).await?;

    Ok(())
}
