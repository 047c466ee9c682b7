use crate::config::SyncConfig;
use crate::domain::Post;

use super::{css_suffix, escape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSide {
    Left,
    Right,
}

/// Horizontal flex row per post with a fixed-size thumbnail before or after
/// the text column.
pub fn render(posts: &[Post], config: &SyncConfig, side: ImageSide) -> String {
    let mut blocks = Vec::with_capacity(posts.len());

    for post in posts {
        let container = format!(
            "display: flex; align-items: center; margin-bottom: 16px;{}",
            css_suffix(&config.custom_css)
        );

        let image = format!(
            "  <a href=\"{url}\"><img src=\"{cover}\" alt=\"{title}\" \
             width=\"{w}\" height=\"{h}\" \
             style=\"object-fit: cover; border-radius: 6px;\"></a>\n",
            url = escape(&post.url),
            cover = escape(&post.cover_image),
            title = escape(&post.title),
            w = config.image_width,
            h = config.image_height,
        );

        let text_margin = match side {
            ImageSide::Left => "margin-left: 16px;",
            ImageSide::Right => "margin-right: 16px;",
        };
        let text = format!(
            "  <div style=\"{margin}\">\n    \
             <a href=\"{url}\"><strong>{title}</strong></a>\n    \
             <p>{date}</p>\n    \
             <p>{desc}</p>\n  </div>\n",
            margin = text_margin,
            url = escape(&post.url),
            title = escape(&post.title),
            date = escape(&post.formatted_date),
            desc = escape(&post.description),
        );

        let mut body = format!("<div style=\"{}\">\n", container);
        match side {
            ImageSide::Left => {
                body.push_str(&image);
                body.push_str(&text);
            }
            ImageSide::Right => {
                body.push_str(&text);
                body.push_str(&image);
            }
        }
        body.push_str("</div>");

        blocks.push(body);
    }

    blocks.join("\n")
}
