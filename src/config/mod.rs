//! Sync configuration.
//!
//! Options resolve in three layers: built-in defaults, then an optional TOML
//! config file, then CLI flags / `INPUT_*` environment variables (the GitHub
//! Actions input convention). Validation runs once on the fully resolved
//! value, before any network or file I/O.

pub mod validate;

use std::path::Path;

use serde::Deserialize;

use crate::app::{Result, TributaryError};

pub const DEFAULT_DATE_FORMAT: &str = "MMM DD, YYYY";
pub const DEFAULT_SECTION_TITLE: &str = "Latest Blog Posts";
pub const DEFAULT_NO_POSTS_MESSAGE: &str = "No blog posts found.";

/// Fully resolved run configuration. Passed explicitly into each component;
/// there is no process-wide config singleton.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Hashnode publication host, e.g. `blog.example.com`.
    pub publication_name: String,
    pub post_count: u32,
    pub display_format: String,
    pub filename: String,
    pub card_width: u32,
    pub image_width: u32,
    pub image_height: u32,
    pub date_format: String,
    pub description_length: usize,
    pub custom_css: String,
    pub section_title: String,
    pub no_posts_message: String,
    pub target_branch: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            publication_name: String::new(),
            post_count: 6,
            display_format: "stacked-left".to_string(),
            filename: "README.md".to_string(),
            card_width: 500,
            image_width: 100,
            image_height: 100,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            description_length: 200,
            custom_css: String::new(),
            section_title: DEFAULT_SECTION_TITLE.to_string(),
            no_posts_message: DEFAULT_NO_POSTS_MESSAGE.to_string(),
            target_branch: "main".to_string(),
        }
    }
}

impl SyncConfig {
    /// Load a configuration file, with missing fields falling back to
    /// defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TributaryError::Config(format!("cannot read config file {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            TributaryError::Config(format!("invalid config file {}: {}", path.display(), e))
        })
    }
}
