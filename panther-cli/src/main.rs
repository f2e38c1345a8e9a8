//! Panther CLI
//!
//! Command-line interface for managing Panther resources through the API.

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use panther_client::PantherClient;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "panther")]
#[command(about = "Panther management API CLI", long_about = None)]
struct Cli {
    /// Panther API URL (API root or GraphQL endpoint)
    #[arg(long, env = "PANTHER_API_URL")]
    url: String,

    /// Panther API token
    #[arg(long, env = "PANTHER_API_TOKEN", hide_env_values = true)]
    token: String,

    /// Retries after a connection failure
    #[arg(long, env = "PANTHER_MAX_RETRIES")]
    max_retries: Option<u32>,

    /// Deadline for each call, in seconds
    #[arg(long, env = "PANTHER_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "panther_cli=info,panther_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        url: cli.url,
        token: cli.token,
        max_retries: cli.max_retries,
        timeout_secs: cli.timeout_secs,
    };

    let client_config = config.client_config();
    debug!(config = ?client_config, "Loaded configuration");

    let client =
        PantherClient::new(&client_config).context("Failed to initialize Panther client")?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling request");
            on_interrupt.cancel();
        }
    });

    handle_command(cli.command, &client, &cancel).await
}
