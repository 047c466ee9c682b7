use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::app::{Result, TributaryError};

use super::DocumentStore;

pub const GITHUB_API: &str = "https://api.github.com";

/// Document store backed by the GitHub REST contents API, scoped to one
/// repository and branch.
pub struct GithubStore {
    client: Client,
    api_base: String,
    repo: String,
    token: String,
    branch: String,
}

impl GithubStore {
    pub fn new(repo: impl Into<String>, token: impl Into<String>, branch: impl Into<String>) -> Self {
        Self::with_api_base(GITHUB_API, repo, token, branch)
    }

    pub fn with_api_base(
        api_base: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("tributary/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_base: api_base.into(),
            repo: repo.into(),
            token: token.into(),
            branch: branch.into(),
        }
    }

    fn contents_url(&self, path: &str) -> String {
        format!("{}/repos/{}/contents/{}", self.api_base, self.repo, path)
    }

    /// Fetch the contents entry for `path` on the configured branch.
    /// Missing files resolve to `None`.
    async fn fetch_entry(&self, path: &str) -> Result<Option<ContentsEntry>> {
        let response = self
            .client
            .get(self.contents_url(path))
            .query(&[("ref", self.branch.as_str())])
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| TributaryError::DocumentRead {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let status = response.status();
        if !status.is_success() {
            return Err(TributaryError::DocumentRead {
                path: path.to_string(),
                reason: format!("HTTP {}", status),
            });
        }

        let entry = response
            .json::<ContentsEntry>()
            .await
            .map_err(|e| TributaryError::DocumentRead {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Some(entry))
    }
}

#[derive(Debug, Deserialize)]
struct ContentsEntry {
    sha: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WriteResponse {
    commit: CommitInfo,
}

#[derive(Debug, Deserialize)]
struct CommitInfo {
    sha: String,
}

/// The contents API wraps base64 at 60 columns; strip whitespace before
/// decoding.
fn decode_content(entry: &ContentsEntry, path: &str) -> Result<String> {
    let packed: String = entry
        .content
        .as_deref()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let bytes = BASE64
        .decode(packed)
        .map_err(|e| TributaryError::DocumentRead {
            path: path.to_string(),
            reason: format!("invalid base64 content: {}", e),
        })?;

    String::from_utf8(bytes).map_err(|e| TributaryError::DocumentRead {
        path: path.to_string(),
        reason: format!("document is not UTF-8: {}", e),
    })
}

#[async_trait]
impl DocumentStore for GithubStore {
    async fn read(&self, path: &str) -> Result<String> {
        match self.fetch_entry(path).await? {
            None => Ok(String::new()),
            Some(entry) => decode_content(&entry, path),
        }
    }

    async fn write(&self, path: &str, content: &str, message: &str) -> Result<String> {
        // The contents API requires the current blob sha when updating an
        // existing file.
        let sha = self.fetch_entry(path).await?.map(|e| e.sha);

        let mut body = serde_json::json!({
            "message": message,
            "content": BASE64.encode(content),
            "branch": self.branch,
        });
        if let Some(sha) = sha {
            body["sha"] = serde_json::Value::String(sha);
        }

        let response = self
            .client
            .put(self.contents_url(path))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .json(&body)
            .send()
            .await
            .map_err(|e| TributaryError::DocumentWrite {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TributaryError::DocumentWrite {
                path: path.to_string(),
                reason: format!("HTTP {}: {}", status, detail.chars().take(200).collect::<String>()),
            });
        }

        let parsed = response
            .json::<WriteResponse>()
            .await
            .map_err(|e| TributaryError::DocumentWrite {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        tracing::info!(path, commit = %parsed.commit.sha, "committed document update");
        Ok(parsed.commit.sha)
    }
}
