//! tickema - single-ticker EMA collector.
//!
//! Prints a CSV table of smoothed prices on stdout, followed by the exit
//! statistics. Logs go to stderr.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tickema_bot::{AppConfig, Application};
use tracing::info;

/// Collect a fixed number of ticker updates and smooth them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Product to subscribe to (e.g. ETH-USD)
    #[arg(value_name = "SYMBOL")]
    symbol: String,

    /// Number of samples to handle before exiting
    #[arg(value_name = "BUDGET", value_parser = clap::value_parser!(u64).range(1..))]
    budget: u64,

    /// Configuration file path (can also be set via TICKEMA_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Initialize TLS crypto provider (must be before any WS connections)
    tickema_ws::init_crypto();

    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref())?;
    tickema_telemetry::init_logging(&config.telemetry.log_level)?;

    info!("Starting tickema v{}", env!("CARGO_PKG_VERSION"));
    info!(ws_url = %config.ws_url, channel = %config.channel, "Configuration loaded");

    let app = Application::new(config)?;
    let mut stdout = std::io::stdout();
    let report = app.run(&args.symbol, args.budget, &mut stdout).await?;

    if report.is_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
