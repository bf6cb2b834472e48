mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info};

const DEFAULT_LOG_FILE: &str = "analyser.log";

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();

    // The screen command always keeps an append-mode run log, so successive
    // batch runs accumulate in one place; inspect only logs when asked.
    let log_file = cli.log_file.clone().or_else(|| match &cli.command {
        Commands::Screen(_) => Some(PathBuf::from(DEFAULT_LOG_FILE)),
        Commands::Inspect(_) => None,
    });
    logging::setup_logging(cli.verbose, cli.quiet, log_file.as_deref())?;

    info!(
        "🚀 PharmScreen CLI v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Screen(args) => {
            info!("Dispatching to 'screen' command.");
            commands::screen::run(args)
        }
        Commands::Inspect(args) => {
            info!("Dispatching to 'inspect' command.");
            commands::inspect::run(args)
        }
    };

    match &command_result {
        Ok(_) => {
            info!("✅ Command completed successfully.");
        }
        Err(e) => {
            error!("❌ Command failed: {}", e);
        }
    }

    command_result
}
