//! Botany Bay console host

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bay_runtime::config::ENV_LOG;
use bay_runtime::{load_config, BayHost, ConsoleOutput};

/// Botany Bay: public trials for accused botters
#[derive(Parser, Debug)]
#[command(name = "bay-runtime")]
#[command(about = "Console host for Botany Bay trials")]
struct Args {
    /// Trial length in seconds (overrides BAY_TRIAL_SECS)
    #[arg(long)]
    trial_secs: Option<u64>,

    /// Log filter used when BAY_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print announcements as JSON objects
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for game output
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let mut config = load_config();
    if let Some(secs) = args.trial_secs {
        config.trial_duration = Duration::from_secs(secs);
    }
    config.validate().context("invalid trial configuration")?;
    info!(
        trial_secs = config.trial_duration.as_secs(),
        default_accusation = %config.default_accusation,
        "Configuration loaded"
    );

    let (output, mut printed) = ConsoleOutput::channel();
    let printer = tokio::spawn(async move {
        while let Some(line) = printed.recv().await {
            println!("{line}");
        }
    });

    let (lines_tx, lines_rx) = mpsc::channel(64);
    tokio::spawn(async move {
        let mut stdin = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match stdin.next_line().await {
                Ok(Some(line)) => {
                    if lines_tx.send(line).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "Failed to read console input");
                    break;
                }
            }
        }
    });

    let (host, events) = BayHost::new(config, args.json, output)?;
    tokio::select! {
        result = host.run(lines_rx, events) => result?,
        _ = tokio::signal::ctrl_c() => info!("Interrupted, shutting down"),
    }

    // host dropped; the printer drains what is left and stops
    printer.await.context("printer task failed")?;
    Ok(())
}
