//! # stockcart CLI Library
//!
//! Terminal shell around `stockcart-core`. `main.rs` only calls [`run`];
//! everything else lives here so it can be tested without a terminal.
//!
//! ## Module Organization
//! ```text
//! stockcart_cli/
//! ├── lib.rs          ◄─── You are here (arguments, logging, run)
//! ├── config.rs       ◄─── Defaults + STOCKCART_* environment
//! ├── error.rs        ◄─── CommandError / SessionError
//! ├── menu.rs         ◄─── The nine menu entries
//! ├── prompt.rs       ◄─── Re-prompting input helpers
//! ├── render.rs       ◄─── Text output for lists and receipts
//! ├── session.rs      ◄─── Menu loop
//! └── commands/
//!     ├── catalog.rs  ◄─── insert / update price / remove / display
//!     └── cart.rs     ◄─── add / remove / deduct / checkout
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod session;

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{CliConfig, OutputFormat};
use session::Session;
use stockcart_core::MAX_SHOPPING_CARTS;

/// Catalog and multi-cart checkout at the terminal.
#[derive(Debug, Parser)]
#[command(name = "stockcart", version, about)]
pub struct Args {
    /// Number of shopping carts (asked for at startup when omitted)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=MAX_SHOPPING_CARTS as i64))]
    pub carts: Option<u16>,

    /// Print lists, receipts and failures as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level written to stderr (overridden by RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Args {
    /// Applies command-line overrides on top of `config`.
    pub fn apply(&self, mut config: CliConfig) -> CliConfig {
        if let Some(carts) = self.carts {
            config.carts = Some(usize::from(carts));
        }
        if self.json {
            config.output = OutputFormat::Json;
        }
        config
    }
}

/// Parses arguments, sets up logging and runs the menu on stdin/stdout.
pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level);

    let config = args.apply(CliConfig::from_env());
    info!(?config, "starting stockcart");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Session::start(config, stdin.lock(), stdout.lock())
        .context("failed to initialize the shopping carts")?;
    let teardown = session.run().context("menu session failed")?;

    info!(?teardown, "stockcart finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with menu output.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
