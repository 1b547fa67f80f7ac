//! timetracker library root.
//! Exposes the report aggregator, auth capabilities, exporters, the CLI
//! parser and the high-level run() function.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg),
        Commands::Logout => cli::commands::login::handle_logout(cfg),
        Commands::Whoami => cli::commands::login::handle_whoami(cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Clients => cli::commands::clients::handle(cfg),
        Commands::Days { .. } => cli::commands::days::handle(&cli.command, cfg),
        Commands::Employee { .. } => cli::commands::employee::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Diagnostics on stderr, filtered by `TIMETRACKER_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("TIMETRACKER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line overrides win over the config file
    if let Some(data) = &cli.data {
        cfg.data_file = data.clone();
    }
    if let Some(session) = &cli.session {
        cfg.session_file = session.clone();
    }

    tracing::debug!(data = %cfg.data_file, session = %cfg.session_file, "configuration resolved");

    dispatch(&cli, &cfg)
}
