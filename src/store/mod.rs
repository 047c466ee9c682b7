pub mod github;
pub mod local;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::app::Result;

pub use github::GithubStore;
pub use local::LocalStore;

/// Capability interface over the target-document backend.
///
/// Implementations are branch-scoped at construction; the pipeline never
/// branches on which backend it is talking to.
#[async_trait]
pub trait DocumentStore {
    /// Read a document. A missing file yields empty content, not an error.
    async fn read(&self, path: &str) -> Result<String>;

    /// Write `content` to `path` with a commit message; returns a commit
    /// identifier.
    async fn write(&self, path: &str, content: &str, message: &str) -> Result<String>;
}

/// Short content fingerprint used in change logging and as the local
/// store's commit identifier.
pub fn digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let full = hex::encode(hasher.finalize());
    full[..12].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_stable_and_short() {
        assert_eq!(digest("hello"), digest("hello"));
        assert_ne!(digest("hello"), digest("hello2"));
        assert_eq!(digest("hello").len(), 12);
    }
}
