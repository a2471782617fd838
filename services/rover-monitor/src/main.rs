//! Rover Monitor CLI
//!
//! Command-line interface for the rover status monitor.

use std::path::PathBuf;

use clap::Parser;
use rover_core::load_config;
use rover_monitor::Config;
use tracing::Level;

#[derive(Parser)]
#[command(name = "rover-monitor")]
#[command(about = "Poll the record store and show the rover's latest status")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Record store URL (overrides config file)
    #[arg(long)]
    store_url: Option<String>,

    /// Polling interval in milliseconds (overrides config file)
    #[arg(long)]
    interval_ms: Option<u64>,

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
        "Parsed command line arguments: config={:?}, store_url={:?}, interval_ms={:?}, log_level={:?}",
        args.config,
        args.store_url,
        args.interval_ms,
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
    if let Some(interval_ms) = args.interval_ms {
        config.polling_interval_ms = interval_ms;
    }

    tracing::info!("Starting rover monitor against {}", config.store.base_url);
    rover_monitor::run(config).await?;

    Ok(())
}
