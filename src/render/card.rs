use crate::config::SyncConfig;
use crate::domain::Post;

use super::{css_suffix, escape};

/// Vertical card per post: full-width cover on top, then title, meta line,
/// and description, bounded by `card_width`.
pub fn render(posts: &[Post], config: &SyncConfig) -> String {
    let mut blocks = Vec::with_capacity(posts.len());

    for post in posts {
        let container = format!(
            "border: 1px solid #e1e4e8; border-radius: 8px; overflow: hidden; \
             max-width: {}px; margin-bottom: 16px;{}",
            config.card_width,
            css_suffix(&config.custom_css)
        );

        let mut body = String::new();
        body.push_str(&format!("<div style=\"{}\">\n", container));
        body.push_str(&format!(
            "  <a href=\"{url}\"><img src=\"{cover}\" alt=\"{title}\" \
             style=\"width: 100%; object-fit: cover;\"></a>\n",
            url = escape(&post.url),
            cover = escape(&post.cover_image),
            title = escape(&post.title),
        ));
        body.push_str("  <div style=\"padding: 16px;\">\n");
        body.push_str(&format!(
            "    <a href=\"{url}\"><strong>{title}</strong></a>\n",
            url = escape(&post.url),
            title = escape(&post.title),
        ));
        body.push_str(&format!("    <p>{}</p>\n", meta_line(post)));
        if let Some(tags) = tag_line(post) {
            body.push_str(&format!("    <p>{}</p>\n", tags));
        }
        body.push_str(&format!("    <p>{}</p>\n", escape(&post.description)));
        body.push_str("  </div>\n</div>");

        blocks.push(body);
    }

    blocks.join("\n")
}

fn meta_line(post: &Post) -> String {
    let mut line = escape(&post.formatted_date).into_owned();
    if post.read_time > 0 {
        line.push_str(&format!(" &middot; {} min read", post.read_time));
    }
    line
}

fn tag_line(post: &Post) -> Option<String> {
    if post.tags.is_empty() {
        return None;
    }
    let tags: Vec<String> = post
        .tags
        .iter()
        .map(|t| format!("<code>#{}</code>", escape(&t.name)))
        .collect();
    Some(tags.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tag;

    #[test]
    fn test_card_contains_meta_and_tags() {
        let mut post = Post::new("p1".into());
        post.title = "Hello".into();
        post.url = "https://blog.example.com/hello".into();
        post.formatted_date = "Mar 05, 2024".into();
        post.read_time = 4;
        post.tags = vec![Tag {
            name: "Rust".into(),
            slug: "rust".into(),
        }];

        let config = SyncConfig {
            card_width: 640,
            ..SyncConfig::default()
        };
        let rendered = render(&[post], &config);

        assert!(rendered.contains("max-width: 640px"));
        assert!(rendered.contains("Mar 05, 2024 &middot; 4 min read"));
        assert!(rendered.contains("<code>#Rust</code>"));
    }

    #[test]
    fn test_custom_css_appended_to_container() {
        let mut post = Post::new("p1".into());
        post.title = "Hello".into();
        let config = SyncConfig {
            custom_css: "background: #fafafa;".into(),
            ..SyncConfig::default()
        };
        let rendered = render(&[post], &config);
        assert!(rendered.contains("margin-bottom: 16px; background: #fafafa;"));
    }
}
