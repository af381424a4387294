use std::fs::File;
use std::io::BufRead;
use std::sync::{Arc, Mutex};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tickerboard::client::{QuoteSource, StocksClient};
use tickerboard::config::{fetch_config, fetch_dashboard_config};
use tickerboard::credentials::{self, CredentialKey};
use tickerboard::provider::AlphaVantageClient;
use tickerboard::service::QuoteService;
use tickerboard::{TickerboardError, server, tui};

/// Log file used while the dashboard owns the terminal.
const DASHBOARD_LOG_FILE: &str = "tickerboard.log";

#[derive(Parser)]
#[command(name = "tickerboard", version, about = "Stock quote proxy and terminal dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve quotes from the upstream provider on /api/stocks.
    Serve,
    /// Open the dashboard against a running proxy.
    Dashboard {
        /// Proxy base URL; overrides TICKERBOARD_API_URL.
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Open the dashboard with built-in sample quotes.
    Demo,
    /// Read the provider API key from stdin and store it in the keychain.
    StoreKey,
}

fn main() -> Result<(), TickerboardError> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Serve | Command::StoreKey => init_stdout_logging(),
        Command::Dashboard { .. } | Command::Demo => init_file_logging()?,
    }

    if let Command::StoreKey = cli.command {
        return store_key();
    }

    if let Command::Serve = cli.command {
        // Must run before the runtime spawns worker threads.
        credentials::populate_env_from_keychain();
    }
    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        Command::Serve => {
            let config = fetch_config()?;
            let provider = AlphaVantageClient::new(&config.provider)?;
            let service = Arc::new(QuoteService::new(Arc::new(provider), config.watchlist));
            runtime.block_on(server::serve(service, config.server.bind_addr))
        }
        Command::Dashboard { api_url } => {
            let api_url = api_url.unwrap_or_else(|| fetch_dashboard_config().api_url);
            let client = StocksClient::new(&api_url)?;
            runtime.block_on(tui::run(QuoteSource::Proxy(client)))
        }
        Command::Demo => runtime.block_on(tui::run(QuoteSource::Demo)),
        Command::StoreKey => Ok(()),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stdout_logging() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

fn init_file_logging() -> Result<(), TickerboardError> {
    let file = File::create(DASHBOARD_LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn store_key() -> Result<(), TickerboardError> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let key = line.trim();
    if key.is_empty() {
        return Err(TickerboardError::Config("no API key given on stdin".to_string()));
    }
    credentials::save(CredentialKey::AlphaVantageApiKey, key)?;
    tracing::info!("stored API key in keychain");
    Ok(())
}
