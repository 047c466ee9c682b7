use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback cover shown when a post has no image of its own.
pub const PLACEHOLDER_COVER: &str =
    "https://placehold.co/800x420/1e293b/ffffff?text=Blog+Post";

pub const DEFAULT_TITLE: &str = "Untitled";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
}

/// A normalized blog post, built once per run from the raw API payload and
/// immutable afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub cover_image: String,
    pub published_at: Option<DateTime<Utc>>,
    /// Display-ready date string, derived from `published_at` using the
    /// configured date format.
    pub formatted_date: String,
    pub author_name: String,
    pub author_username: String,
    pub tags: Vec<Tag>,
    pub read_time: u32,
}

impl Post {
    pub fn new(id: String) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            url: String::new(),
            cover_image: PLACEHOLDER_COVER.to_string(),
            published_at: None,
            formatted_date: String::new(),
            author_name: String::new(),
            author_username: String::new(),
            tags: Vec::new(),
            read_time: 0,
        }
    }

    /// Cover URL with the placeholder substituted for empty values.
    pub fn display_cover(&self) -> &str {
        if self.cover_image.is_empty() {
            PLACEHOLDER_COVER
        } else {
            &self.cover_image
        }
    }
}
