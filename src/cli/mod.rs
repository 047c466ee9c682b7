pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::Result;
use crate::config::SyncConfig;

#[derive(Parser)]
#[command(name = "tributary")]
#[command(about = "Sync recent Hashnode posts into a README section", long_about = None)]
pub struct Cli {
    /// Force the local filesystem store, even on a hosted runner
    #[arg(long, global = true)]
    pub local: bool,

    /// Directory the local store resolves document paths against
    #[arg(long, global = true, default_value = ".")]
    pub local_root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch posts, render them, and update the target document
    Sync {
        #[command(flatten)]
        options: ConfigArgs,
    },
    /// Fetch and render only; print the block to stdout without writing
    Render {
        #[command(flatten)]
        options: ConfigArgs,
    },
    /// Resolve and validate the configuration, then exit
    Check {
        #[command(flatten)]
        options: ConfigArgs,
    },
}

/// Configuration flags. Every flag doubles as a `INPUT_*` environment
/// variable, which is how a GitHub Actions step passes its inputs.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// TOML config file, applied under flags and environment
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Hashnode publication host, e.g. blog.example.com
    #[arg(long, env = "INPUT_PUBLICATION_NAME")]
    pub publication_name: Option<String>,

    /// Number of posts to fetch (1-12)
    #[arg(long, env = "INPUT_POST_COUNT")]
    pub post_count: Option<u32>,

    /// One of: card, stacked-left, stacked-right, list, table
    #[arg(long, env = "INPUT_DISPLAY_FORMAT")]
    pub display_format: Option<String>,

    /// Target document path, relative to the repository root
    #[arg(long, env = "INPUT_FILENAME")]
    pub filename: Option<String>,

    /// Card layout width in pixels (100-1200)
    #[arg(long, env = "INPUT_CARD_WIDTH")]
    pub card_width: Option<u32>,

    /// Thumbnail width in pixels (50-500)
    #[arg(long, env = "INPUT_IMAGE_WIDTH")]
    pub image_width: Option<u32>,

    /// Thumbnail height in pixels (50-500)
    #[arg(long, env = "INPUT_IMAGE_HEIGHT")]
    pub image_height: Option<u32>,

    /// Moment-style date tokens (e.g. "MMM DD, YYYY"), or "relative"
    #[arg(long, env = "INPUT_DATE_FORMAT")]
    pub date_format: Option<String>,

    /// Description cut-off in characters (50-1000)
    #[arg(long, env = "INPUT_DESCRIPTION_LENGTH")]
    pub description_length: Option<usize>,

    /// Extra CSS appended to each rendered container
    #[arg(long, env = "INPUT_CUSTOM_CSS")]
    pub custom_css: Option<String>,

    /// Heading rendered above the post block; empty disables the heading
    #[arg(long, env = "INPUT_SECTION_TITLE")]
    pub section_title: Option<String>,

    /// Text rendered when the publication has no posts
    #[arg(long, env = "INPUT_NO_POSTS_MESSAGE")]
    pub no_posts_message: Option<String>,

    /// Branch the document is read from and committed to
    #[arg(long, env = "INPUT_TARGET_BRANCH")]
    pub target_branch: Option<String>,
}

impl ConfigArgs {
    /// Resolve the layered configuration: defaults, then the config file,
    /// then flags/environment.
    pub fn resolve(&self) -> Result<SyncConfig> {
        let mut config = match &self.config {
            Some(path) => SyncConfig::load(path)?,
            None => SyncConfig::default(),
        };

        if let Some(v) = &self.publication_name {
            config.publication_name = v.clone();
        }
        if let Some(v) = self.post_count {
            config.post_count = v;
        }
        if let Some(v) = &self.display_format {
            config.display_format = v.clone();
        }
        if let Some(v) = &self.filename {
            config.filename = v.clone();
        }
        if let Some(v) = self.card_width {
            config.card_width = v;
        }
        if let Some(v) = self.image_width {
            config.image_width = v;
        }
        if let Some(v) = self.image_height {
            config.image_height = v;
        }
        if let Some(v) = &self.date_format {
            config.date_format = v.clone();
        }
        if let Some(v) = self.description_length {
            config.description_length = v;
        }
        if let Some(v) = &self.custom_css {
            config.custom_css = v.clone();
        }
        if let Some(v) = &self.section_title {
            config.section_title = v.clone();
        }
        if let Some(v) = &self.no_posts_message {
            config.no_posts_message = v.clone();
        }
        if let Some(v) = &self.target_branch {
            config.target_branch = v.clone();
        }

        Ok(config)
    }
}
