//! Rain3 Telemetry main entry point
//!
//! This is the command-line interface that polls a Wilo Rain3 controller and
//! prints its readings.

use anyhow::Context;
use clap::Parser;
use rain3_telemetry::config::{load_config, Config};
use rain3_telemetry::output::print_report;
use rain3_telemetry::{read_metrics, HttpFetcher, Provider, TelemetrySnapshot};
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

/// Rain3 Telemetry: typed readings from a Wilo Rain3 pump controller
///
/// Polls the controller's status pages on a fixed interval and prints the
/// resulting readings. Unreachable pages only affect their own readings.
#[derive(Parser, Debug)]
#[command(name = "rain3-telemetry")]
#[command(version)]
#[command(about = "Polls a Wilo Rain3 pump controller", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Poll once and exit
    #[arg(long)]
    once: bool,

    /// Print every reading, including those disabled by default
    #[arg(long)]
    all: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    let mut provider =
        Provider::from_config(&config).context("failed to set up the HTTP client")?;

    tokio::select! {
        result = run(&mut provider, &config, &cli) => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, abandoning in-flight requests");
            Ok(())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("rain3_telemetry=info,warn"),
            1 => EnvFilter::new("rain3_telemetry=debug,info"),
            2 => EnvFilter::new("rain3_telemetry=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Initializes the provider and polls until interrupted
///
/// Cycles run one at a time; a cycle that overruns the interval delays the
/// next one instead of overlapping it.
async fn run(
    provider: &mut Provider<HttpFetcher>,
    config: &Config,
    cli: &Cli,
) -> anyhow::Result<()> {
    let first = provider
        .initialize()
        .await
        .with_context(|| format!("failed to initialize device at {}", config.device.address))?;
    report(provider, &first, cli.all);

    if cli.once {
        return Ok(());
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(config.polling.interval));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately and initialization already polled
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let snapshot = provider.poll().await?;
        report(provider, &snapshot, cli.all);
    }
}

fn report(provider: &Provider<HttpFetcher>, snapshot: &TelemetrySnapshot, all: bool) {
    let Some(identity) = provider.identity() else {
        return;
    };
    let readings = read_metrics(provider.model().catalog(), snapshot, &identity.unique_id);
    print_report(identity, snapshot, &readings, all);
}
