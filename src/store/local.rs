use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::app::{Result, TributaryError};

use super::{digest, DocumentStore};

/// Filesystem-backed document store, used when running outside a hosted
/// runner (and in tests). The commit identifier is a content digest.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

#[async_trait]
impl DocumentStore for LocalStore {
    async fn read(&self, path: &str) -> Result<String> {
        match tokio::fs::read_to_string(self.resolve(path)).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(TributaryError::DocumentRead {
                path: path.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn write(&self, path: &str, content: &str, message: &str) -> Result<String> {
        let full = self.resolve(path);

        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| TributaryError::DocumentWrite {
                    path: path.to_string(),
                    reason: e.to_string(),
                })?;
        }

        tokio::fs::write(&full, content)
            .await
            .map_err(|e| TributaryError::DocumentWrite {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let commit = digest(content);
        tracing::debug!(path, commit = %commit, message, "wrote local document");
        Ok(commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let content = tokio_test::block_on(store.read("README.md")).unwrap();
        assert_eq!(content, "");
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        let commit =
            tokio_test::block_on(store.write("docs/README.md", "# hi\n", "update posts")).unwrap();
        assert_eq!(commit, digest("# hi\n"));

        let content = tokio_test::block_on(store.read("docs/README.md")).unwrap();
        assert_eq!(content, "# hi\n");
    }
}
