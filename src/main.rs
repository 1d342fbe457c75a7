//! Vaultdiff - compare the secrets of two vaults in your terminal.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vaultdiff::cli::output;
use vaultdiff::cli::{execute, Cli};
use vaultdiff::error::Error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("VAULTDIFF_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vaultdiff=debug")
        } else {
            EnvFilter::new("vaultdiff=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command).await {
        let suggestion = match &e {
            Error::NoConfig => Some("create vaultdiff.toml with a [vaults.<name>] entry"),
            Error::MissingToken(_) => Some("export the vault's token environment variable"),
            Error::VaultsRequired => Some("run: vaultdiff diff <left> <right>"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
