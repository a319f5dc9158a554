//! Fintrack CLI - command-line access to the Fintrack finance backend.
//!
//! Every resource operation of `fintrack-core` is available as a subcommand.
//! Payloads are printed to stdout as pretty JSON; logs go to stderr.

mod commands;
mod views;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{CrudAction, DebtAction, TransactionAction};
use fintrack_core::{ClientConfig, FintrackApi};
use std::time::Duration;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fintrack")]
#[command(about = "Command-line client for the Fintrack finance backend")]
struct Args {
    /// Backend base URL (defaults to $FINTRACK_API_URL, then http://localhost:8000)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true, default_value_t = 10_000)]
    timeout_ms: u64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Spending and income categories
    Categories {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Transactions and weekly reports
    Transactions {
        #[command(subcommand)]
        action: TransactionAction,
    },
    /// Debts
    Debts {
        #[command(subcommand)]
        action: DebtAction,
    },
    /// Wishlist items
    Wishlists {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Investments
    Investments {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Print the dashboard route table
    Routes,
    /// Resolve a dashboard path and load the data its view shows
    Open {
        /// Dashboard path, e.g. /debts
        path: String,
    },
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        let config = match &self.base_url {
            Some(url) => ClientConfig::new(url.clone()),
            None => ClientConfig::from_env(),
        };
        config.with_timeout(Duration::from_millis(self.timeout_ms))
    }
}

fn init_logging(debug: bool, json: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug, args.json_logs);

    let api = FintrackApi::new(args.client_config())?;
    debug!("Using API base {}", api.base_url());

    let payload = match args.command {
        Command::Categories { action } => commands::run_crud(&api.categories(), action).await?,
        Command::Transactions { action } => commands::run_transactions(&api, action).await?,
        Command::Debts { action } => commands::run_debts(&api, action).await?,
        Command::Wishlists { action } => commands::run_crud(&api.wishlists(), action).await?,
        Command::Investments { action } => commands::run_crud(&api.investments(), action).await?,
        Command::Routes => views::route_table(),
        Command::Open { path } => views::open(&api, &path).await?,
    };

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
