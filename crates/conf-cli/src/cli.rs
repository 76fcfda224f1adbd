//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Conf - Keep shared settings consistent across your dev tools
#[derive(Parser, Debug)]
#[command(name = "conf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check a settings document for cross-tool contradictions
    ///
    /// Prints every finding to stderr, ordered by pipeline stage.
    /// Exits 0 when the document is consistent (warnings allowed),
    /// 1 when any contradiction or type mismatch is found.
    ///
    /// Examples:
    ///   conf validate settings.toml
    ///   conf validate settings.toml --json > bundle.json
    Validate {
        /// Path to the TOML settings document
        path: PathBuf,

        /// Output the resolved bundle as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Resolve contradictions and emit the repaired document
    ///
    /// Shared settings are rewritten to their authoritative values;
    /// comments, ordering, and unrelated keys survive verbatim.
    ///
    /// Examples:
    ///   conf resolve settings.toml              # print to stdout
    ///   conf resolve settings.toml --diff       # preview as unified diff
    ///   conf resolve settings.toml --write      # repair in place
    Resolve {
        /// Path to the TOML settings document
        path: PathBuf,

        /// Write the repaired document back in place
        #[arg(long)]
        write: bool,

        /// Print a unified diff against the input instead of the document
        #[arg(long)]
        diff: bool,
    },
}
