pub mod date;

use chrono::{DateTime, Utc};

use crate::domain::{Post, Tag};
use crate::fetcher::RawPost;

/// Pseudo-format selecting elapsed-time wording instead of a date pattern.
pub const RELATIVE_FORMAT: &str = "relative";

pub const UNKNOWN_DATE: &str = "Unknown date";
pub const INVALID_DATE: &str = "Invalid date";

/// Maps raw API posts into [`Post`] records, supplying defaults for every
/// optional upstream field.
#[derive(Clone)]
pub struct Normalizer {
    date_format: String,
}

impl Normalizer {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    pub fn normalize(&self, raw: &RawPost, host: &str) -> Post {
        let mut post = Post::new(raw.id.clone());

        if let Some(title) = raw.title.as_deref().filter(|t| !t.is_empty()) {
            post.title = title.to_string();
        }

        post.description = raw.brief.clone().unwrap_or_default();

        post.url = match raw.url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => url.to_string(),
            // Posts occasionally arrive without a canonical URL; rebuild it
            // from the publication host and slug.
            None => format!("https://{}/{}", host, raw.slug.as_deref().unwrap_or_default()),
        };

        if let Some(cover) = raw
            .cover_image
            .as_ref()
            .and_then(|c| c.url.as_deref())
            .filter(|u| !u.is_empty())
        {
            post.cover_image = cover.to_string();
        }

        let (published_at, formatted_date) = self.derive_date(raw.published_at.as_deref());
        post.published_at = published_at;
        post.formatted_date = formatted_date;

        if let Some(author) = &raw.author {
            post.author_name = author.name.clone().unwrap_or_default();
            post.author_username = author.username.clone().unwrap_or_default();
        }

        post.tags = raw
            .tags
            .iter()
            .flatten()
            .map(|t| Tag {
                name: t.name.clone().unwrap_or_default(),
                slug: t.slug.clone().unwrap_or_default(),
            })
            .collect();

        post.read_time = raw.read_time_in_minutes.unwrap_or(0);

        post
    }

    /// Parse the upstream timestamp and derive the display string.
    ///
    /// Missing dates yield "Unknown date" and unparseable ones "Invalid
    /// date"; neither aborts the run.
    fn derive_date(&self, published_at: Option<&str>) -> (Option<DateTime<Utc>>, String) {
        let raw = match published_at.filter(|s| !s.is_empty()) {
            Some(raw) => raw,
            None => return (None, UNKNOWN_DATE.to_string()),
        };

        match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => {
                let utc = parsed.with_timezone(&Utc);
                let formatted = if self.date_format == RELATIVE_FORMAT {
                    date::format_relative(utc, Utc::now())
                } else {
                    date::format_tokens(utc, &self.date_format)
                };
                (Some(utc), formatted)
            }
            Err(_) => (None, INVALID_DATE.to_string()),
        }
    }
}
