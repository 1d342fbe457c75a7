use thiserror::Error;

use crate::core::diff::Side;

#[derive(Error, Debug)]
pub enum Error {
    #[error("ambiguous match: duplicate secret name {name:?} in the {side} vault")]
    AmbiguousMatch { side: Side, name: String },

    #[error("invalid comparison mode: {0} (expected all, only-missing or only-modified)")]
    InvalidComparisonMode(String),

    #[error("{vault}: {} of {total} secrets failed to fetch: {}", failed.len(), failed.join(", "))]
    PartialFetch {
        vault: String,
        failed: Vec<String>,
        total: usize,
    },

    #[error("vault not configured: {0}")]
    VaultNotFound(String),

    #[error("secret not found: {0}")]
    SecretNotFound(String),

    #[error("no vaultdiff.toml found")]
    NoConfig,

    #[error("token environment variable not set: {0}")]
    MissingToken(String),

    #[error("two vaults are required (pass them as arguments or run interactively)")]
    VaultsRequired,

    #[error("vault request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
