//! vaultdiff.toml management.
//!
//! Declares the named vaults a user can diff against. Looked up in the
//! current directory first, then under the platform config directory
//! (`~/.config/vaultdiff/vaultdiff.toml` on Linux).
//!
//! ```toml
//! [vaults.staging]
//! url = "https://vault.staging.example.com"
//! token_env = "STAGING_VAULT_TOKEN"
//!
//! [vaults.production]
//! url = "https://vault.example.com"
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = "vaultdiff.toml";

/// Default environment variable holding a vault's access token.
pub const DEFAULT_TOKEN_ENV: &str = "VAULTDIFF_TOKEN";

/// Parsed vaultdiff.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Named vault definitions, keyed by the name used on the command line.
    #[serde(default)]
    pub vaults: BTreeMap<String, VaultEntry>,
}

/// One `[vaults.<name>]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultEntry {
    /// Base URL of the vault API.
    pub url: String,
    /// Environment variable the access token is read from.
    #[serde(default)]
    pub token_env: Option<String>,
}

impl Config {
    /// Load configuration, failing if no config file exists.
    pub fn load() -> Result<Self> {
        Self::load_optional()?.ok_or(Error::NoConfig)
    }

    /// Load configuration if a config file exists.
    pub fn load_optional() -> Result<Option<Self>> {
        let Some(path) = Self::find() else {
            return Ok(None);
        };
        debug!(path = %path.display(), "loading config");
        let raw = std::fs::read_to_string(&path)?;
        Ok(Some(Self::parse(&raw)?))
    }

    /// Parse config from a TOML string.
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Locate the config file: cwd first, then the platform config dir.
    fn find() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        let global = dirs::config_dir()?.join("vaultdiff").join(CONFIG_FILE);
        global.exists().then_some(global)
    }

    /// Look up a vault entry by name.
    pub fn vault(&self, name: &str) -> Result<&VaultEntry> {
        self.vaults
            .get(name)
            .ok_or_else(|| Error::VaultNotFound(name.to_string()))
    }
}

impl VaultEntry {
    /// Resolve this vault's access token from the environment.
    pub fn token(&self) -> Result<String> {
        let var = self.token_env.as_deref().unwrap_or(DEFAULT_TOKEN_ENV);
        std::env::var(var).map_err(|_| Error::MissingToken(var.to_string()))
    }
}
