pub mod post;

pub use post::{Post, Tag, DEFAULT_TITLE, PLACEHOLDER_COVER};
