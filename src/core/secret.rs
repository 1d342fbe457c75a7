//! Secret record type.
//!
//! The narrow, data-only shape the diff engine works with. Vault backends
//! adapt their richer responses into this before anything is compared.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One secret as fetched from a vault.
///
/// `name` is the sole identity key: two records from different vaults refer
/// to the same secret iff their names are equal (case-sensitive). Records are
/// constructed once per fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretRecord {
    pub name: String,
    pub value: String,
    /// Optional classification (e.g. "text/plain", "application/json").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Carried for display only; not compared.
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    /// Whether the vault manages this secret itself; not compared.
    #[serde(default)]
    pub managed: bool,
    /// Free-form vault tags; not compared.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

fn enabled_default() -> bool {
    true
}

impl SecretRecord {
    /// Create a record with just a name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            content_type: None,
            enabled: true,
            managed: false,
            tags: BTreeMap::new(),
        }
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}
