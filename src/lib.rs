//! rTimecard library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod update;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::In { .. } | Commands::Out { .. } | Commands::Clock { .. } => {
            cli::commands::clock::handle(&cli.command, cfg)
        }
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Undo => cli::commands::undo::handle(cfg),
        Commands::Auto => cli::commands::auto::handle(cfg),
        Commands::Version | Commands::Update => cli::commands::version::handle(&cli.command, cli),
        Commands::Install | Commands::Uninstall => {
            cli::commands::install::handle(&cli.command, cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // Command-line override of the timecard directory.
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // Old timecards go quietly; the sweep never blocks a punch.
    for old in store::sweep_stale(&cfg, utils::date::today()) {
        ui::messages::info(format!("Removed old timecard {}", old.display()));
    }

    dispatch(&cli, &cfg)
}
