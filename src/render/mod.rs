//! Post list rendering.
//!
//! Five layouts over the same normalized records. Markdown-only layouts
//! (`list`) emit post fields verbatim; every HTML-emitting layout escapes
//! content-derived text before interpolation so a hostile post title cannot
//! inject markup into the target document.

pub mod card;
pub mod list;
pub mod stacked;
pub mod table;

use std::borrow::Cow;

use crate::config::SyncConfig;
use crate::domain::{Post, PLACEHOLDER_COVER};

pub const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFormat {
    Card,
    StackedLeft,
    StackedRight,
    List,
    Table,
}

impl DisplayFormat {
    pub const NAMES: &'static [&'static str] =
        &["card", "stacked-left", "stacked-right", "list", "table"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "card" => Some(Self::Card),
            "stacked-left" => Some(Self::StackedLeft),
            "stacked-right" => Some(Self::StackedRight),
            "list" => Some(Self::List),
            "table" => Some(Self::Table),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::StackedLeft => "stacked-left",
            Self::StackedRight => "stacked-right",
            Self::List => "list",
            Self::Table => "table",
        }
    }
}

/// Render `posts` in the configured layout.
///
/// An empty list renders the configured empty-state message verbatim. An
/// unrecognized format name (normally caught by validation) falls back to
/// `stacked-left` with a warning rather than failing the run.
pub fn render(posts: &[Post], config: &SyncConfig) -> String {
    if posts.is_empty() {
        return config.no_posts_message.clone();
    }

    let format = DisplayFormat::parse(&config.display_format).unwrap_or_else(|| {
        tracing::warn!(
            format = %config.display_format,
            "unknown display format, falling back to stacked-left"
        );
        DisplayFormat::StackedLeft
    });

    let prepared: Vec<Post> = posts
        .iter()
        .map(|p| prepare(p, config.description_length))
        .collect();

    match format {
        DisplayFormat::Card => card::render(&prepared, config),
        DisplayFormat::StackedLeft => stacked::render(&prepared, config, stacked::ImageSide::Left),
        DisplayFormat::StackedRight => {
            stacked::render(&prepared, config, stacked::ImageSide::Right)
        }
        DisplayFormat::List => list::render(&prepared),
        DisplayFormat::Table => table::render(&prepared, config),
    }
}

/// Per-post pre-processing shared by all layouts: description truncation and
/// cover fallback.
fn prepare(post: &Post, description_length: usize) -> Post {
    let mut post = post.clone();
    post.description = truncate(&post.description, description_length);
    if post.cover_image.is_empty() {
        post.cover_image = PLACEHOLDER_COVER.to_string();
    }
    post
}

/// Cut `text` to `max_chars` characters with an ellipsis suffix when it
/// exceeds the bound; shorter text passes through unchanged.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Escape the five HTML special characters (`& < > " '`).
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_safe(text)
}

/// Append the configured CSS fragment to a container's inline style.
pub(crate) fn css_suffix(custom_css: &str) -> String {
    let trimmed = custom_css.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(" {}", trimmed)
    }
}
