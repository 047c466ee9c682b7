//! Fail-fast configuration validation.
//!
//! Runs before any network or file I/O. The first failing rule raises a
//! [`TributaryError::Config`] naming the offending field; errors are not
//! aggregated.

use crate::app::{Result, TributaryError};
use crate::render::DisplayFormat;

use super::SyncConfig;

const FORBIDDEN_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];
const FORBIDDEN_BRANCH_CHARS: &[char] = &['~', '^', ':', '?', '*', '[', '\\'];

pub fn validate(config: &SyncConfig) -> Result<()> {
    validate_publication_name(&config.publication_name)?;

    if !(1..=12).contains(&config.post_count) {
        return Err(field_error(
            "post_count",
            format!("must be between 1 and 12, got {}", config.post_count),
        ));
    }

    if DisplayFormat::parse(&config.display_format).is_none() {
        return Err(field_error(
            "display_format",
            format!(
                "'{}' is not one of {}",
                config.display_format,
                DisplayFormat::NAMES.join(", ")
            ),
        ));
    }

    validate_filename(&config.filename)?;

    validate_range("card_width", config.card_width as u64, 100, 1200)?;
    validate_range("image_width", config.image_width as u64, 50, 500)?;
    validate_range("image_height", config.image_height as u64, 50, 500)?;
    validate_range(
        "description_length",
        config.description_length as u64,
        50,
        1000,
    )?;

    validate_branch(&config.target_branch)?;

    Ok(())
}

fn field_error(field: &str, message: String) -> TributaryError {
    TributaryError::Config(format!("{}: {}", field, message))
}

fn validate_publication_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(field_error(
            "publication_name",
            "must not be empty".to_string(),
        ));
    }
    if name.len() > 100 {
        return Err(field_error(
            "publication_name",
            format!("must be at most 100 characters, got {}", name.len()),
        ));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '.' | '_'))
    {
        return Err(field_error(
            "publication_name",
            format!("contains invalid character '{}'", bad),
        ));
    }
    Ok(())
}

fn validate_filename(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(field_error("filename", "must not be empty".to_string()));
    }
    if name.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(field_error(
            "filename",
            "must not contain path traversal segments".to_string(),
        ));
    }
    let bytes = name.as_bytes();
    let drive_prefixed = bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':';
    if name.starts_with('/') || name.starts_with('\\') || drive_prefixed {
        return Err(field_error(
            "filename",
            "must be a relative path".to_string(),
        ));
    }
    if name.len() > 255 {
        return Err(field_error(
            "filename",
            format!("must be at most 255 characters, got {}", name.len()),
        ));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| FORBIDDEN_FILENAME_CHARS.contains(c) || c.is_control())
    {
        return Err(field_error(
            "filename",
            format!("contains forbidden character '{}'", bad.escape_default()),
        ));
    }
    Ok(())
}

fn validate_range(field: &str, value: u64, min: u64, max: u64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(field_error(
            field,
            format!("must be between {} and {}, got {}", min, max, value),
        ));
    }
    Ok(())
}

/// Standard git ref-name restrictions, minus the refspec-only rules.
fn validate_branch(branch: &str) -> Result<()> {
    if branch.is_empty() {
        return Err(field_error(
            "target_branch",
            "must not be empty".to_string(),
        ));
    }
    if branch.len() > 250 {
        return Err(field_error(
            "target_branch",
            format!("must be at most 250 characters, got {}", branch.len()),
        ));
    }
    if branch.starts_with('.') || branch.ends_with('.') {
        return Err(field_error(
            "target_branch",
            "must not start or end with '.'".to_string(),
        ));
    }
    if branch.contains("..") {
        return Err(field_error(
            "target_branch",
            "must not contain '..'".to_string(),
        ));
    }
    if branch.chars().any(char::is_whitespace) {
        return Err(field_error(
            "target_branch",
            "must not contain whitespace".to_string(),
        ));
    }
    if let Some(bad) = branch
        .chars()
        .find(|c| FORBIDDEN_BRANCH_CHARS.contains(c) || c.is_control())
    {
        return Err(field_error(
            "target_branch",
            format!("contains forbidden character '{}'", bad.escape_default()),
        ));
    }
    if branch.contains("@{") || branch.ends_with('/') || branch.ends_with(".lock") {
        return Err(field_error(
            "target_branch",
            "is not a valid branch name".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> SyncConfig {
        SyncConfig {
            publication_name: "blog.example.com".to_string(),
            ..SyncConfig::default()
        }
    }

    fn assert_rejects(config: &SyncConfig, field: &str) {
        match validate(config) {
            Err(TributaryError::Config(msg)) => {
                assert!(msg.starts_with(field), "expected '{}' in '{}'", field, msg)
            }
            other => panic!("expected config error for {}, got {:?}", field, other.err()),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        validate(&valid_config()).unwrap();
    }

    #[test]
    fn test_post_count_boundaries() {
        let mut config = valid_config();
        for ok in [1, 12] {
            config.post_count = ok;
            validate(&config).unwrap();
        }
        for bad in [0, 13] {
            config.post_count = bad;
            assert_rejects(&config, "post_count");
        }
    }

    #[test]
    fn test_display_format_membership() {
        let mut config = valid_config();
        for ok in ["card", "stacked-left", "stacked-right", "list", "table"] {
            config.display_format = ok.to_string();
            validate(&config).unwrap();
        }
        for bad in ["grid", "Card", ""] {
            config.display_format = bad.to_string();
            assert_rejects(&config, "display_format");
        }
    }

    #[test]
    fn test_publication_name_rules() {
        let mut config = valid_config();
        config.publication_name = String::new();
        assert_rejects(&config, "publication_name");

        config.publication_name = "blog!example".to_string();
        assert_rejects(&config, "publication_name");

        config.publication_name = "a".repeat(101);
        assert_rejects(&config, "publication_name");

        config.publication_name = "my-blog.hashnode.dev".to_string();
        validate(&config).unwrap();
    }

    #[test]
    fn test_filename_rules() {
        let mut config = valid_config();
        for bad in [
            "",
            "../README.md",
            "docs/../../etc/passwd",
            "/etc/passwd",
            "C:\\windows\\README.md",
            "read<me>.md",
        ] {
            config.filename = bad.to_string();
            assert_rejects(&config, "filename");
        }

        config.filename = "a".repeat(256);
        assert_rejects(&config, "filename");

        for ok in ["README.md", "docs/posts.md", "profile/README.md"] {
            config.filename = ok.to_string();
            validate(&config).unwrap();
        }
    }

    #[test]
    fn test_numeric_bounds() {
        let mut config = valid_config();
        config.card_width = 99;
        assert_rejects(&config, "card_width");
        config.card_width = 1201;
        assert_rejects(&config, "card_width");
        config.card_width = 1200;
        validate(&config).unwrap();

        config.image_width = 49;
        assert_rejects(&config, "image_width");
        config.image_width = 50;
        config.image_height = 501;
        assert_rejects(&config, "image_height");
        config.image_height = 500;

        config.description_length = 49;
        assert_rejects(&config, "description_length");
        config.description_length = 1000;
        validate(&config).unwrap();
    }

    #[test]
    fn test_branch_rules() {
        let mut config = valid_config();
        for bad in [
            "",
            ".hidden",
            "trailing.",
            "double..dot",
            "has space",
            "bad~ref",
            "star*",
            "back\\slash",
            "reflog@{1}",
            "dir/",
            "name.lock",
        ] {
            config.target_branch = bad.to_string();
            assert_rejects(&config, "target_branch");
        }

        for ok in ["main", "release/2024", "feat-readme_sync"] {
            config.target_branch = ok.to_string();
            validate(&config).unwrap();
        }
    }
}
