//! stockview CLI - Terminal detail view for a single stock ticker.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::time::Duration;
use stockview_lib::prelude::*;
use stockview_lib::url::DEFAULT_BASE_URL;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

mod commands;
mod display;

use display::Source;

#[derive(Parser)]
#[command(name = "stockview")]
#[command(about = "Terminal detail view for a single stock ticker", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the data service
    #[arg(long, global = true, env = "STOCKVIEW_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the live detail view of a ticker
    View {
        /// Ticker symbol (e.g., AAPL, MSFT)
        ticker: String,

        /// Switch to another ticker while the first one is on screen
        #[arg(long)]
        then: Option<String>,

        /// Seconds to wait before switching with --then
        #[arg(long, default_value = "5", requires = "then")]
        after: u64,

        /// Unmount and exit after this many seconds
        #[arg(short, long)]
        duration: Option<u64>,

        /// Print a single frame once every slice has loaded, then exit
        #[arg(long, conflicts_with_all = ["then", "duration"])]
        once: bool,

        /// Redraw period in milliseconds
        #[arg(long, default_value = "100")]
        refresh_ms: u64,

        /// Frame width in columns
        #[arg(short, long, default_value = "80")]
        width: usize,

        /// Print frames one after another instead of redrawing the screen
        #[arg(long)]
        plain: bool,

        /// Scroll period of the headline strip in milliseconds
        #[arg(long, default_value = "50")]
        scroll_ms: u64,
    },

    /// Fetch one data source and print the result as JSON
    Fetch {
        /// Ticker symbol
        ticker: String,

        /// Data source to fetch
        #[arg(short, long, value_enum, default_value = "all")]
        source: Source,
    },

    /// Draw a placeholder price forecast
    Forecast {
        /// Ticker symbol
        ticker: String,

        /// Lower bound of the forecast range
        #[arg(long, default_value_t = ForecastStub::DEFAULT_LOW)]
        low: f64,

        /// Upper bound of the forecast range
        #[arg(long, default_value_t = ForecastStub::DEFAULT_HIGH)]
        high: f64,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let client_config = ClientConfig {
        base_url: cli.api_url,
        timeout: cli.timeout.map(Duration::from_secs),
        ..ClientConfig::default()
    };

    match command {
        Commands::View {
            ticker,
            then,
            after,
            duration,
            once,
            refresh_ms,
            width,
            plain,
            scroll_ms,
        } => {
            let view_config = ViewConfig {
                scroll: ScrollConfig {
                    period: Duration::from_millis(scroll_ms),
                    ..ScrollConfig::default()
                },
                ..ViewConfig::default()
            };
            commands::view::view(
                &ticker,
                then.as_deref(),
                after,
                duration,
                once,
                refresh_ms,
                width,
                plain,
                client_config,
                view_config,
            )
            .await
        }
        Commands::Fetch { ticker, source } => {
            commands::fetch::fetch(&ticker, source, client_config).await
        }
        Commands::Forecast { ticker, low, high } => {
            commands::forecast::forecast(&ticker, low, high)
        }
    }
}
