//! Vault backends.
//!
//! A vault supplies an ordered collection of secret records: list the names,
//! then fetch each value. Fetching goes through the bounded parallel mapper
//! so a concurrency cap can respect upstream rate limits.

pub mod http;
pub mod snapshot;

use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::core::fetch;
use crate::core::secret::SecretRecord;
use crate::error::{Error, Result};
use http::HttpVault;
use snapshot::SnapshotVault;

/// One side of a comparison: a remote vault or a local snapshot file.
pub enum VaultSource {
    Http(HttpVault),
    Snapshot(SnapshotVault),
}

impl VaultSource {
    /// Resolve a command-line vault argument.
    ///
    /// An argument ending in `.json` is opened as a snapshot file; anything
    /// else is looked up in vaultdiff.toml and turned into an HTTP vault
    /// with its token taken from the configured environment variable.
    pub fn resolve(arg: &str, config: Option<&Config>) -> Result<Self> {
        if arg.ends_with(".json") {
            return Ok(Self::Snapshot(SnapshotVault::open(Path::new(arg))?));
        }

        let config = config.ok_or(Error::NoConfig)?;
        let entry = config.vault(arg)?;
        let token = entry.token()?;
        Ok(Self::Http(HttpVault::new(arg, &entry.url, token)))
    }

    /// Name shown in table headers and error messages.
    pub fn label(&self) -> &str {
        match self {
            Self::Http(v) => v.label(),
            Self::Snapshot(v) => v.label(),
        }
    }

    /// List the names of every secret in the vault.
    pub async fn secret_names(&self) -> Result<Vec<String>> {
        match self {
            Self::Http(v) => v.secret_names().await,
            Self::Snapshot(v) => Ok(v.secret_names()),
        }
    }

    /// Fetch a single secret, value included.
    pub async fn get_secret(&self, name: &str) -> Result<SecretRecord> {
        match self {
            Self::Http(v) => v.get_secret(name).await,
            Self::Snapshot(v) => v.get_secret(name),
        }
    }

    /// Fetch every secret in the vault, at most `max_concurrency` value
    /// fetches in flight at once (zero means the host parallelism hint).
    ///
    /// Returns records sorted by name, ready for the diff engine. If any
    /// fetch fails the whole call fails with [`Error::PartialFetch`] naming
    /// the affected secrets; an incomplete collection is never returned.
    pub async fn fetch_all(&self, max_concurrency: usize) -> Result<Vec<SecretRecord>> {
        let names = self.secret_names().await?;
        fetch_records(self.label(), names, max_concurrency, |name: String| {
            async move { self.get_secret(&name).await }
        })
        .await
    }
}

/// List-then-fetch plumbing shared by every backend: bounded value fetches,
/// records re-sorted by name, mapper failures turned into a `PartialFetch`
/// naming the affected secrets.
async fn fetch_records<F, Fut>(
    label: &str,
    names: Vec<String>,
    max_concurrency: usize,
    get: F,
) -> Result<Vec<SecretRecord>>
where
    F: Fn(String) -> Fut,
    Fut: std::future::Future<Output = Result<SecretRecord>>,
{
    let total = names.len();
    debug!(vault = %label, total, max_concurrency, "fetching secret values");

    match fetch::map_parallel(names.clone(), max_concurrency, get).await {
        Ok(mut records) => {
            records.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(records)
        }
        Err(failures) => {
            let mut failed: Vec<String> = failures.iter().map(|f| names[f.index].clone()).collect();
            failed.sort();
            Err(Error::PartialFetch {
                vault: label.to_string(),
                failed,
                total,
            })
        }
    }
}
