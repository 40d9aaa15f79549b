//! Trello CLI - add cards with labels and comments to a board list.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use trello_cli::commands::{require_credentials, run_add_card, AddCardRequest, CommandStatus};
use trello_cli::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use trello_cli::ui::ConsoleReporter;
use trello_cli::{ClientConfig, TrelloClient};

/// Trello CLI - Create cards on Trello boards.
#[derive(Parser)]
#[command(name = "trello")]
#[command(about = "Create Trello cards with labels and comments", version)]
struct Cli {
    /// Trello API key (or set `TRELLO_API_KEY` env var).
    #[arg(long, env = "TRELLO_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Trello API token (or set `TRELLO_TOKEN` env var).
    #[arg(long, env = "TRELLO_TOKEN", default_value = "", hide_env_values = true)]
    token: String,

    /// Trello API base URL.
    #[arg(long, env = "TRELLO_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Per-request timeout in seconds (0 disables it).
    #[arg(long, env = "TRELLO_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Enable verbose logging.
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a card with labels and a comment to a list on a board.
    AddCard {
        /// ID of the Trello board.
        #[arg(long)]
        board_id: String,

        /// Name of the list to add the card to.
        #[arg(long)]
        list_name: String,

        /// Card title.
        #[arg(long)]
        title: String,

        /// Card description.
        #[arg(long, default_value = "")]
        description: String,

        /// Comma-separated label colors (e.g. "red,green,blue").
        #[arg(long, default_value = "")]
        labels: String,

        /// Initial comment on the card.
        #[arg(long, default_value = "")]
        comment: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise keep logs out of the report unless asked
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut reporter = ConsoleReporter;

    let Some(credentials) = require_credentials(&cli.api_key, &cli.token, &mut reporter) else {
        return Ok(ExitCode::from(CommandStatus::Failure.exit_code()));
    };

    let config = ClientConfig::new(credentials)
        .with_api_url(&cli.api_url)?
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = TrelloClient::new(config).context("Failed to create Trello client")?;

    let status = match cli.command {
        Commands::AddCard {
            board_id,
            list_name,
            title,
            description,
            labels,
            comment,
        } => {
            let request = AddCardRequest::new(board_id, list_name, title)
                .description(description)
                .labels_csv(&labels)
                .comment(comment);
            run_add_card(&client, &request, &mut reporter).await
        }
    };

    Ok(ExitCode::from(status.exit_code()))
}
