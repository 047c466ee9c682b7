pub mod hashnode;

use async_trait::async_trait;
use serde::Deserialize;

use crate::app::Result;

/// Post payload exactly as the upstream API shapes it. Every field besides
/// `id` can be missing; the normalizer supplies defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPost {
    pub id: String,
    pub title: Option<String>,
    pub brief: Option<String>,
    pub slug: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<String>,
    pub cover_image: Option<RawCoverImage>,
    pub author: Option<RawAuthor>,
    pub tags: Option<Vec<RawTag>>,
    pub read_time_in_minutes: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCoverImage {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAuthor {
    pub name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTag {
    pub name: Option<String>,
    pub slug: Option<String>,
}

#[async_trait]
pub trait PostSource {
    /// Fetch up to `count` recent posts for the publication at `host`.
    async fn fetch_posts(&self, host: &str, count: u32) -> Result<Vec<RawPost>>;
}
