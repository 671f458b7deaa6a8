//! Catalog file parser for ~/.config/riffle/feeds.toml.
//!
//! Unlike most of the knobs in a reader, the feed catalog is not optional:
//! a missing file is a startup error, because the registry must be
//! non-empty. Unknown keys are silently ignored by serde, though we log a
//! warning when the file contains potential typos.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::registry::FeedDescriptor;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read feeds file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in feeds file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Feeds file not found at {0} (create it with at least one [[feeds]] entry)")]
    Missing(String),

    /// Feeds file exceeds maximum allowed size.
    #[error("Feeds file too large: {0}")]
    TooLarge(String),
}

/// One `[[feeds]]` table in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntry {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
}

/// Top-level catalog configuration.
///
/// `feeds` is the ordered catalog; field-level validation (blank/invalid
/// urls) happens in `FeedRegistry::from_descriptors`, not here; this layer
/// only deals with file shape.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Ordered feed catalog.
    #[serde(default)]
    pub feeds: Vec<FeedEntry>,

    /// Per-request fetch timeout in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Maximum feeds file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load the catalog from a TOML file.
    ///
    /// - Missing file → `Err(ConfigError::Missing)` (the catalog is required)
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted (serde default behavior), logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Feeds file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::Missing(path.display().to_string()));
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = std::fs::read_to_string(path)?;

        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = ["feeds", "fetch_timeout_secs"];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in feeds file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            feeds = config.feeds.len(),
            "Loaded feed catalog"
        );
        Ok(config)
    }

    /// The catalog as registry input, in file order.
    pub fn descriptors(&self) -> Vec<FeedDescriptor> {
        self.feeds
            .iter()
            .map(|entry| FeedDescriptor {
                url: entry.url.clone(),
                name: entry.name.clone(),
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        let path = Path::new("/tmp/riffle_test_nonexistent_feeds.toml");
        let result = Config::load(path);
        assert!(matches!(result, Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_catalog_parsed_in_order() {
        let dir = std::env::temp_dir().join("riffle_config_test_order");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feeds.toml");

        let content = r#"
[[feeds]]
url = "https://a.com/rss"
name = "A"

[[feeds]]
url = "https://b.com/rss"
name = "B"
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.feeds.len(), 2);
        assert_eq!(config.feeds[0].name, "A");
        assert_eq!(config.feeds[1].url, "https://b.com/rss");
        assert_eq!(config.fetch_timeout_secs, 30); // default

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_fetch_timeout_override() {
        let dir = std::env::temp_dir().join("riffle_config_test_timeout");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feeds.toml");

        let content = r#"
fetch_timeout_secs = 5

[[feeds]]
url = "https://a.com/rss"
name = "A"
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.fetch_timeout_secs, 5);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let dir = std::env::temp_dir().join("riffle_config_test_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feeds.toml");
        std::fs::write(&path, "this is not [valid toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let dir = std::env::temp_dir().join("riffle_config_test_unknown");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feeds.toml");

        let content = r#"
totally_fake_key = "should not fail"

[[feeds]]
url = "https://a.com/rss"
name = "A"
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.feeds.len(), 1);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_empty_file_yields_empty_catalog() {
        // The registry layer is the one that rejects an empty catalog;
        // config just reports what the file says.
        let dir = std::env::temp_dir().join("riffle_config_test_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feeds.toml");
        std::fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.feeds.is_empty());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_too_large_file_rejected() {
        let dir = std::env::temp_dir().join("riffle_config_test_too_large");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feeds.toml");

        let content = "a".repeat(1_048_577);
        std::fs::write(&path, content).unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::TooLarge(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_fields_default_to_blank() {
        // Blank fields survive parsing; the registry rejects them with a
        // pointed error instead of a generic serde message.
        let dir = std::env::temp_dir().join("riffle_config_test_blank");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feeds.toml");

        let content = r#"
[[feeds]]
url = "https://a.com/rss"
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.feeds[0].name, "");

        std::fs::remove_dir_all(&dir).ok();
    }
}
