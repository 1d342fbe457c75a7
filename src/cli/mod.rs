//! Command-line interface.

pub mod completions;
pub mod diff;
pub mod output;
pub mod vaults;

use clap::{Parser, Subcommand};

use crate::core::diff::ComparisonMode;
use crate::error::Result;

/// Compare the secrets of two vaults in your terminal.
#[derive(Parser)]
#[command(
    name = "vaultdiff",
    about = "Compare the secrets of two vaults and review the differences",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Compare two vaults and show the differences
    Diff {
        /// Left vault: a configured vault name or a .json snapshot file
        left: Option<String>,
        /// Right vault: a configured vault name or a .json snapshot file
        right: Option<String>,
        /// Which differences to report: all, only-missing or only-modified
        /// [default: all; prompted for when running interactively]
        #[arg(long)]
        mode: Option<ComparisonMode>,
        /// Maximum concurrent value fetches per vault (0 = number of CPUs)
        #[arg(short, long, default_value_t = 0, env = "VAULTDIFF_CONCURRENCY")]
        concurrency: usize,
        /// Output the diff as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the vaults configured in vaultdiff.toml
    Vaults,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub async fn execute(command: Command) -> Result<()> {
    match command {
        Command::Diff {
            left,
            right,
            mode,
            concurrency,
            json,
        } => diff::execute(left, right, mode, concurrency, json).await,
        Command::Vaults => vaults::execute(),
        Command::Completions { shell } => completions::execute(shell),
    }
}
