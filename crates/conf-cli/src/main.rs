//! Conf CLI
//!
//! The command-line interface for checking and repairing cross-tool settings
//! documents.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use conf_core::RunStatus;
use error::Result;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Validate { path, json }) => {
            let status = commands::run_validate(&path, json)?;
            Ok(if status == RunStatus::Failed { 1 } else { 0 })
        }
        Some(Commands::Resolve { path, write, diff }) => {
            commands::run_resolve(&path, write, diff)?;
            Ok(0)
        }
        None => {
            // No command provided - show help hint
            println!("{} Cross-tool settings checker", "conf".green().bold());
            println!();
            println!("Run {} for available commands.", "conf --help".cyan());
            Ok(0)
        }
    }
}
