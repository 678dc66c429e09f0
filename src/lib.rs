//! rollcall library root.
//! Exposes the CLI parser, the high-level run() function, the HTTP server
//! and the roll-call core.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod server;
pub mod storage;
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
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Call { .. } => cli::commands::call::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
        Commands::Stats => cli::commands::stats::handle(cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ tracing su stderr (RUST_LOG, default: info)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .ok();

    // 2️⃣ parse CLI
    let cli = Cli::parse();

    // 3️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 4️⃣ applica eventuale override della data directory
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
