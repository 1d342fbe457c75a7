//! Vaults command - list configured vaults.

use crate::cli::output;
use crate::config::{Config, DEFAULT_TOKEN_ENV};
use crate::error::Result;

/// List the vaults declared in vaultdiff.toml.
pub fn execute() -> Result<()> {
    let config = Config::load()?;

    if config.vaults.is_empty() {
        output::dimmed("no vaults configured");
        output::hint("add a [vaults.<name>] entry to vaultdiff.toml");
        return Ok(());
    }

    output::header(&format!("{} vaults:", config.vaults.len()));
    for (name, entry) in &config.vaults {
        let token_env = entry.token_env.as_deref().unwrap_or(DEFAULT_TOKEN_ENV);
        println!("  {}  {}  (token: ${})", name, entry.url, token_env);
    }

    Ok(())
}
