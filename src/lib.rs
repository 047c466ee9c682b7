//! # Tributary
//!
//! Syncs recent posts from a Hashnode publication into a README section.
//!
//! ## Architecture
//!
//! Tributary follows a modular pipeline architecture:
//!
//! ```text
//! Validator → Fetcher → Normalizer → Renderer → Merger → Store
//! ```
//!
//! - [`config`]: option resolution plus fail-fast validation
//! - [`fetcher`]: Hashnode GraphQL client behind the [`PostSource`](fetcher::PostSource) trait
//! - [`normalizer`]: raw API payloads to normalized [`Post`](domain::Post) records
//! - [`render`]: five Markdown/HTML display formats
//! - [`merge`]: idempotent sentinel-marker section splice
//! - [`store`]: document backends (GitHub REST contents API, local filesystem)
//!
//! ## Quick Start
//!
//! ```bash
//! # Preview the rendered block
//! tributary render --publication-name blog.example.com --display-format list
//!
//! # Update README.md in the current directory
//! tributary --local sync --publication-name blog.example.com
//!
//! # Validate configuration only
//! tributary check --publication-name blog.example.com
//! ```
//!
//! On a GitHub Actions runner every flag is also read from the matching
//! `INPUT_*` environment variable, and the repository/token from the runner
//! environment select the REST-backed document store.

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components:
/// post source, document store, normalizer, configuration.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `sync` - Fetch, render, and update the target document
/// - `render` - Print the rendered block without writing
/// - `check` - Validate the resolved configuration
pub mod cli;

/// Configuration resolution and validation.
///
/// Defaults ← optional TOML file ← flags and `INPUT_*` environment
/// variables; validated before any I/O happens.
pub mod config;

/// Core domain models.
///
/// - [`Post`](domain::Post): a normalized blog post record
/// - [`Tag`](domain::Tag): post tag name/slug pair
pub mod domain;

/// Post fetching.
///
/// - [`PostSource`](fetcher::PostSource): async trait over the post backend
/// - [`HashnodeSource`](fetcher::hashnode::HashnodeSource): GraphQL implementation
pub mod fetcher;

/// Idempotent sentinel-marker merge into the target document.
pub mod merge;

/// Raw payload normalization and date display formatting.
pub mod normalizer;

/// Post list rendering.
///
/// Five layouts (card, stacked-left, stacked-right, list, table) with
/// HTML escaping and description truncation.
pub mod render;

/// Document persistence.
///
/// - [`DocumentStore`](store::DocumentStore): trait defining read/write
/// - [`GithubStore`](store::GithubStore): REST contents API implementation
/// - [`LocalStore`](store::LocalStore): filesystem implementation
pub mod store;
