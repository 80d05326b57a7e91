//! minesim library root.
//! Exposes the CLI parser, the high-level run() function and the simulation modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg_path: &Path) -> AppResult<()> {
    // init must work even when the existing file is broken
    if let Commands::Init { force } = &cli.command {
        return cli::commands::init::handle(cfg_path, *force);
    }

    let cfg = Config::load(cfg_path)?;
    let color = !cli.no_color;

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, &cfg, cfg_path),
        Commands::Run { .. } => cli::commands::run::handle(&cli.command, &cfg, color),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, &cfg, color),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg_path = Config::resolve_path(cli.config.as_deref());
    log::debug!("using configuration {}", cfg_path.display());

    dispatch(&cli, &cfg_path)
}
