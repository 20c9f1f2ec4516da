//! Run configuration module.
//!
//! Handles loading and validating an optional `relink.toml` placed in the
//! base directory. Every knob defaults to the conventions the content tree
//! already follows, so most runs need no config file at all:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # Subdirectories of the base directory that hold article folders
//! sections = ["articles", "feedback-friday"]
//!
//! # HTML filename expected inside each article folder
//! article_file = "article.html"
//!
//! # Local image filename convention: <prefix><N>.<ext>
//! image_prefix = "image-"
//! image_ext = "webp"
//!
//! # Number assigned to the first <img> occurrence. Image 1 is the cover,
//! # managed outside the article body, so in-content images start at 2.
//! start_index = 2
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Name of the optional config file, looked up in the base directory.
pub const CONFIG_FILE: &str = "relink.toml";

/// Run configuration loaded from `relink.toml`.
///
/// All fields have defaults matching the content tree conventions. User
/// config files need only specify the values they want to override.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelinkConfig {
    /// Subdirectories of the base directory scanned for article folders.
    pub sections: Vec<String>,
    /// HTML filename expected inside each article folder.
    pub article_file: String,
    /// Filename prefix of local images.
    pub image_prefix: String,
    /// Filename extension of local images, without the dot.
    pub image_ext: String,
    /// Expected image number for the first `<img>` occurrence.
    pub start_index: usize,
}

impl Default for RelinkConfig {
    fn default() -> Self {
        Self {
            sections: vec!["articles".to_string(), "feedback-friday".to_string()],
            article_file: "article.html".to_string(),
            image_prefix: "image-".to_string(),
            image_ext: "webp".to_string(),
            start_index: 2,
        }
    }
}

impl RelinkConfig {
    /// Expected local filename for the `<img>` occurrence at 0-based scan
    /// position `i`.
    pub fn expected_filename(&self, i: usize) -> String {
        format!("{}{}.{}", self.image_prefix, i + self.start_index, self.image_ext)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::Validation(
                "sections must name at least one subdirectory".to_string(),
            ));
        }
        if self.article_file.is_empty() {
            return Err(ConfigError::Validation(
                "article_file must not be empty".to_string(),
            ));
        }
        if self.image_prefix.is_empty() || self.image_ext.is_empty() {
            return Err(ConfigError::Validation(
                "image_prefix and image_ext must not be empty".to_string(),
            ));
        }
        if self.start_index == 0 {
            return Err(ConfigError::Validation(
                "start_index must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load config from `relink.toml` in the given directory.
///
/// Returns defaults when the file doesn't exist; otherwise parses it,
/// rejects unknown keys, and validates the result.
pub fn load_config(base: &Path) -> Result<RelinkConfig, ConfigError> {
    let path = base.join(CONFIG_FILE);
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        RelinkConfig::default()
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();

        assert_eq!(config.sections, vec!["articles", "feedback-friday"]);
        assert_eq!(config.article_file, "article.html");
        assert_eq!(config.start_index, 2);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "sections = [\"posts\"]\n").unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.sections, vec!["posts"]);
        assert_eq!(config.article_file, "article.html");
        assert_eq!(config.image_ext, "webp");
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "sectionss = [\"posts\"]\n").unwrap();

        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn empty_sections_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "sections = []\n").unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn zero_start_index_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "start_index = 0\n").unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn expected_filename_starts_at_two() {
        let config = RelinkConfig::default();
        assert_eq!(config.expected_filename(0), "image-2.webp");
        assert_eq!(config.expected_filename(3), "image-5.webp");
    }
}
