//! Diff command.
//!
//! Fetches the full secret set from both vaults concurrently, runs the
//! engine and renders the result.

use std::io::{self, IsTerminal};

use dialoguer::Select;
use tracing::info;

use crate::cli::output;
use crate::config::Config;
use crate::core::diff::{diff, ComparisonMode};
use crate::error::{Error, Result};
use crate::vault::VaultSource;

/// Compare two vaults and print the differences.
pub async fn execute(
    left: Option<String>,
    right: Option<String>,
    mode: Option<ComparisonMode>,
    concurrency: usize,
    json: bool,
) -> Result<()> {
    let config = Config::load_optional()?;

    // When vaults are picked interactively, the mode is prompted for too
    // unless --mode pinned it.
    let (left, right, mode) = match (left, right) {
        (Some(l), Some(r)) => (l, r, mode.unwrap_or(ComparisonMode::All)),
        (None, None) => {
            let (l, r) = choose_vaults(config.as_ref())?;
            let mode = match mode {
                Some(mode) => mode,
                None => choose_mode()?,
            };
            (l, r, mode)
        }
        _ => return Err(Error::VaultsRequired),
    };

    let left_vault = VaultSource::resolve(&left, config.as_ref())?;
    let right_vault = VaultSource::resolve(&right, config.as_ref())?;

    if !json {
        output::progress(&format!(
            "fetching secrets from {} and {}",
            left_vault.label(),
            right_vault.label()
        ));
    }

    let fetched = tokio::try_join!(
        left_vault.fetch_all(concurrency),
        right_vault.fetch_all(concurrency),
    );
    if !json {
        output::progress_done(fetched.is_ok());
    }
    let (left_secrets, right_secrets) = fetched?;

    info!(
        left = left_secrets.len(),
        right = right_secrets.len(),
        %mode,
        "comparing vaults"
    );

    let items = diff(&left_secrets, &right_secrets, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        output::success(&format!(
            "no differences between {} and {} (mode: {})",
            left_vault.label(),
            right_vault.label(),
            mode
        ));
        return Ok(());
    }

    let table = output::diff_table(left_vault.label(), right_vault.label(), &items);
    println!("{table}");

    Ok(())
}

/// Interactively pick the two vaults from the configured set.
fn choose_vaults(config: Option<&Config>) -> Result<(String, String)> {
    if !io::stdin().is_terminal() {
        return Err(Error::VaultsRequired);
    }

    let config = config.ok_or(Error::NoConfig)?;
    let names: Vec<&String> = config.vaults.keys().collect();
    if names.len() < 2 {
        return Err(Error::VaultsRequired);
    }

    let left = Select::new()
        .with_prompt("Left vault")
        .items(&names)
        .default(0)
        .interact()?;

    let remaining: Vec<&String> = names
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != left)
        .map(|(_, n)| *n)
        .collect();

    let right = Select::new()
        .with_prompt("Right vault")
        .items(&remaining)
        .default(0)
        .interact()?;

    Ok((names[left].clone(), remaining[right].clone()))
}

/// The modes offered interactively, broadest first.
const MODE_CHOICES: [ComparisonMode; 3] = [
    ComparisonMode::All,
    ComparisonMode::OnlyMissing,
    ComparisonMode::OnlyModified,
];

/// Interactively pick the comparison mode.
fn choose_mode() -> Result<ComparisonMode> {
    let picked = Select::new()
        .with_prompt("Comparison mode")
        .items(&MODE_CHOICES)
        .default(0)
        .interact()?;

    Ok(MODE_CHOICES[picked])
}
