//! Snapshot vault backend.
//!
//! Reads a local JSON export (an array of secret records) and serves it
//! through the same surface as a remote vault. Lets diffs run without
//! network access and backs the integration test suite.

use std::path::Path;

use tracing::debug;

use crate::core::secret::SecretRecord;
use crate::error::{Error, Result};

/// A vault backed by a JSON file on disk.
pub struct SnapshotVault {
    label: String,
    records: Vec<SecretRecord>,
}

impl SnapshotVault {
    /// Load a snapshot file. The label shown in output is the file stem.
    pub fn open(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let records: Vec<SecretRecord> = serde_json::from_str(&raw)?;

        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!(%label, count = records.len(), "loaded snapshot");
        Ok(Self { label, records })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn secret_names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }

    pub fn get_secret(&self, name: &str) -> Result<SecretRecord> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .ok_or_else(|| Error::SecretNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn snapshot_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_open_and_get() {
        let file = snapshot_file(
            r#"[
                {"name":"API_KEY","value":"hunter2"},
                {"name":"DB_URL","value":"postgres://","contentType":"text"}
            ]"#,
        );

        let vault = SnapshotVault::open(file.path()).unwrap();
        assert_eq!(vault.secret_names(), vec!["API_KEY", "DB_URL"]);

        let secret = vault.get_secret("DB_URL").unwrap();
        assert_eq!(secret.value, "postgres://");
        assert_eq!(secret.content_type.as_deref(), Some("text"));
    }

    #[test]
    fn test_missing_secret() {
        let file = snapshot_file("[]");
        let vault = SnapshotVault::open(file.path()).unwrap();
        assert!(matches!(
            vault.get_secret("NOPE"),
            Err(Error::SecretNotFound(_))
        ));
    }

    #[test]
    fn test_malformed_snapshot() {
        let file = snapshot_file(r#"{"not":"an array"}"#);
        assert!(matches!(
            SnapshotVault::open(file.path()),
            Err(Error::Json(_))
        ));
    }
}
