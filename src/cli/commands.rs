use std::io::Write;

use crate::app::{AppContext, Result};
use crate::domain::Post;
use crate::fetcher::PostSource as _;
use crate::store::DocumentStore as _;
use crate::{merge, render, store};

/// What a run produced, exposed to the caller (and as step outputs on a
/// hosted runner).
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub posts_fetched: usize,
    pub changed: bool,
    pub commit_id: Option<String>,
}

/// The full pipeline: fetch, normalize, render, merge, and write the target
/// document when its content actually changed.
pub async fn sync(ctx: &AppContext) -> Result<SyncOutcome> {
    let config = &ctx.config;

    let posts = fetch_and_normalize(ctx).await?;
    let block = render::render(&posts, config);

    let existing = ctx.store.read(&config.filename).await?;
    let merged = merge::merge(&existing, &block, &config.section_title);

    if merged == existing {
        tracing::info!(path = %config.filename, "document unchanged, nothing to write");
        return Ok(SyncOutcome {
            posts_fetched: posts.len(),
            changed: false,
            commit_id: None,
        });
    }

    tracing::debug!(
        path = %config.filename,
        before = %store::digest(&existing),
        after = %store::digest(&merged),
        "document content changed"
    );

    let message = format!(
        "docs: sync {} post{} from {}",
        posts.len(),
        if posts.len() == 1 { "" } else { "s" },
        config.publication_name
    );
    let commit = ctx.store.write(&config.filename, &merged, &message).await?;

    Ok(SyncOutcome {
        posts_fetched: posts.len(),
        changed: true,
        commit_id: Some(commit),
    })
}

/// Fetch and render without touching the document store.
pub async fn render_preview(ctx: &AppContext) -> Result<String> {
    let posts = fetch_and_normalize(ctx).await?;
    Ok(render::render(&posts, &ctx.config))
}

async fn fetch_and_normalize(ctx: &AppContext) -> Result<Vec<Post>> {
    let config = &ctx.config;
    let raw = ctx
        .source
        .fetch_posts(&config.publication_name, config.post_count)
        .await?;
    tracing::info!(count = raw.len(), host = %config.publication_name, "fetched posts");

    Ok(raw
        .iter()
        .map(|r| ctx.normalizer.normalize(r, &config.publication_name))
        .collect())
}

/// Append the run outputs to `GITHUB_OUTPUT` when the runner provides one.
pub fn publish_outputs(outcome: &SyncOutcome) -> std::io::Result<()> {
    let path = match std::env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => path,
        _ => return Ok(()),
    };

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "posts_fetched={}", outcome.posts_fetched)?;
    writeln!(file, "changed={}", outcome.changed)?;
    writeln!(file, "commit_id={}", outcome.commit_id.as_deref().unwrap_or_default())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::app::AppContext;
    use crate::config::SyncConfig;
    use crate::fetcher::{PostSource, RawPost};
    use crate::merge::{END_MARKER, START_MARKER};
    use crate::store::LocalStore;

    /// Post source with canned responses, standing in for the GraphQL API.
    struct StaticSource {
        posts: Vec<RawPost>,
    }

    #[async_trait]
    impl PostSource for StaticSource {
        async fn fetch_posts(&self, _host: &str, count: u32) -> Result<Vec<RawPost>> {
            Ok(self.posts.iter().take(count as usize).cloned().collect())
        }
    }

    fn raw_post(id: &str, title: &str, published_at: &str) -> RawPost {
        RawPost {
            id: id.into(),
            title: Some(title.into()),
            url: Some(format!("https://blog.example.com/{id}")),
            published_at: Some(published_at.into()),
            ..Default::default()
        }
    }

    fn list_config() -> SyncConfig {
        SyncConfig {
            publication_name: "blog.example.com".into(),
            display_format: "list".into(),
            ..SyncConfig::default()
        }
    }

    fn context(dir: &std::path::Path, posts: Vec<RawPost>, config: SyncConfig) -> AppContext {
        AppContext::with_components(
            config,
            Arc::new(StaticSource { posts }),
            Arc::new(LocalStore::new(dir)),
        )
    }

    #[tokio::test]
    async fn test_sync_writes_document_then_noops() {
        let dir = tempfile::tempdir().unwrap();
        let posts = vec![
            raw_post("a", "A", "2024-03-01T00:00:00Z"),
            raw_post("b", "B", "2024-03-02T00:00:00Z"),
        ];

        let ctx = context(dir.path(), posts.clone(), list_config());
        let outcome = sync(&ctx).await.unwrap();
        assert_eq!(outcome.posts_fetched, 2);
        assert!(outcome.changed);
        assert!(outcome.commit_id.is_some());

        let written = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(written.contains(START_MARKER));
        assert!(written.contains(END_MARKER));
        assert!(written.contains("- **Mar 01, 2024**: [A](https://blog.example.com/a)"));
        assert!(written.contains("- **Mar 02, 2024**: [B](https://blog.example.com/b)"));
        // Input order is preserved in the rendered list.
        assert!(written.find("[A]").unwrap() < written.find("[B]").unwrap());

        // Second run with identical inputs must not touch the file.
        let ctx = context(dir.path(), posts, list_config());
        let outcome = sync(&ctx).await.unwrap();
        assert!(!outcome.changed);
        assert!(outcome.commit_id.is_none());
    }

    #[tokio::test]
    async fn test_sync_preserves_text_outside_markers() {
        let dir = tempfile::tempdir().unwrap();
        let existing = format!(
            "# Profile\n\n{}\nold block\n{}\n\n## Contact\nemail\n",
            START_MARKER, END_MARKER
        );
        std::fs::write(dir.path().join("README.md"), &existing).unwrap();

        let ctx = context(
            dir.path(),
            vec![raw_post("a", "A", "2024-03-01T00:00:00Z")],
            list_config(),
        );
        sync(&ctx).await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(written.starts_with("# Profile\n\n"));
        assert!(written.ends_with("\n\n## Contact\nemail\n"));
        assert!(!written.contains("old block"));
    }

    #[tokio::test]
    async fn test_sync_empty_publication_writes_message() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), Vec::new(), list_config());

        let outcome = sync(&ctx).await.unwrap();
        assert_eq!(outcome.posts_fetched, 0);
        assert!(outcome.changed);

        let written = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(written.contains("No blog posts found."));
    }

    #[tokio::test]
    async fn test_render_preview_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(
            dir.path(),
            vec![raw_post("a", "A", "2024-03-01T00:00:00Z")],
            list_config(),
        );

        let block = render_preview(&ctx).await.unwrap();
        assert_eq!(block, "- **Mar 01, 2024**: [A](https://blog.example.com/a)");
        assert!(!dir.path().join("README.md").exists());
    }
}
