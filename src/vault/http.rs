//! HTTP vault backend.
//!
//! Talks to a KV-style secrets API: a paginated listing endpoint plus a
//! per-secret fetch, authenticated with a bearer token.

use serde::Deserialize;
use tracing::debug;

use crate::core::secret::SecretRecord;
use crate::error::Result;

/// A remote vault reachable over HTTPS.
pub struct HttpVault {
    label: String,
    base_url: String,
    token: String,
    http: reqwest::Client,
}

/// One page of the secret listing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPage {
    secrets: Vec<SecretSummary>,
    /// Cursor for the next page, absent on the last one.
    #[serde(default)]
    next: Option<String>,
}

#[derive(Deserialize)]
struct SecretSummary {
    name: String,
}

impl HttpVault {
    pub fn new(label: impl Into<String>, base_url: &str, token: String) -> Self {
        Self {
            label: label.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            http: reqwest::Client::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// List the names of every secret in the vault, following pagination
    /// cursors until the listing is exhausted.
    pub async fn secret_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = self
                .http
                .get(format!("{}/v1/secrets", self.base_url))
                .bearer_auth(&self.token);
            if let Some(after) = &cursor {
                request = request.query(&[("after", after)]);
            }

            let page: ListPage = request.send().await?.error_for_status()?.json().await?;
            names.extend(page.secrets.into_iter().map(|s| s.name));

            match page.next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(vault = %self.label, count = names.len(), "listed secrets");
        Ok(names)
    }

    /// Fetch a single secret, value included.
    pub async fn get_secret(&self, name: &str) -> Result<SecretRecord> {
        let record = self
            .http
            .get(format!("{}/v1/secrets/{}", self.base_url, name))
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(record)
    }
}
