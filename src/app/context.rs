use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::SyncConfig;
use crate::fetcher::hashnode::HashnodeSource;
use crate::fetcher::PostSource;
use crate::normalizer::Normalizer;
use crate::store::{DocumentStore, GithubStore, LocalStore};

/// Document backend, picked exactly once at startup and injected into the
/// pipeline. Nothing downstream branches on which one is active.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Github { repo: String, token: String },
    Local { root: PathBuf },
}

impl StoreBackend {
    /// Detect the backend from the environment: a repository plus an API
    /// token means a hosted runner and selects the REST-backed store;
    /// anything else (or `--local`) selects the filesystem store.
    pub fn detect(force_local: bool, local_root: &Path) -> Self {
        if !force_local {
            let repo = env::var("GITHUB_REPOSITORY").ok().filter(|v| !v.is_empty());
            let token = env::var("INPUT_GH_TOKEN")
                .ok()
                .filter(|v| !v.is_empty())
                .or_else(|| env::var("GITHUB_TOKEN").ok().filter(|v| !v.is_empty()));

            if let (Some(repo), Some(token)) = (repo, token) {
                return Self::Github { repo, token };
            }
            tracing::debug!("no repository/token in environment, using local store");
        }

        Self::Local {
            root: local_root.to_path_buf(),
        }
    }
}

pub struct AppContext {
    pub source: Arc<dyn PostSource + Send + Sync>,
    pub store: Arc<dyn DocumentStore + Send + Sync>,
    pub normalizer: Normalizer,
    pub config: SyncConfig,
}

impl AppContext {
    pub fn new(config: SyncConfig, backend: StoreBackend) -> Self {
        let store: Arc<dyn DocumentStore + Send + Sync> = match backend {
            StoreBackend::Github { repo, token } => {
                tracing::debug!(%repo, branch = %config.target_branch, "using GitHub document store");
                Arc::new(GithubStore::new(repo, token, config.target_branch.clone()))
            }
            StoreBackend::Local { root } => {
                tracing::debug!(root = %root.display(), "using local document store");
                Arc::new(LocalStore::new(root))
            }
        };

        let source: Arc<dyn PostSource + Send + Sync> = Arc::new(HashnodeSource::new());
        Self::with_components(config, source, store)
    }

    /// Wire an explicit source and store; the entry point for tests and
    /// alternate backends.
    pub fn with_components(
        config: SyncConfig,
        source: Arc<dyn PostSource + Send + Sync>,
        store: Arc<dyn DocumentStore + Send + Sync>,
    ) -> Self {
        let normalizer = Normalizer::new(config.date_format.clone());
        Self {
            source,
            store,
            normalizer,
            config,
        }
    }
}
