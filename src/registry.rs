//! The feed catalog: a fixed, ordered list of feed descriptors.
//!
//! The registry is built once at startup from configuration and never
//! mutated afterwards. Construction validates every descriptor, so the rest
//! of the application can index into the catalog without re-checking
//! invariants. A bad catalog is a configuration error, not a runtime one:
//! `main` refuses to start on it.

use thiserror::Error;
use url::Url;

/// Errors produced while building the registry from configuration.
///
/// All of these are fatal at startup; there is no degraded mode with a
/// partial or empty catalog.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The catalog contains no feeds at all.
    #[error("Feed catalog is empty (at least one feed is required)")]
    Empty,
    /// A descriptor's url is missing or blank after trimming.
    #[error("Feed #{index}: url is blank")]
    BlankUrl { index: usize },
    /// A descriptor's name is missing or blank after trimming.
    #[error("Feed #{index}: name is blank")]
    BlankName { index: usize },
    /// A descriptor's url does not parse, or uses a non-HTTP scheme.
    #[error("Feed #{index} (\"{name}\"): {reason}")]
    InvalidUrl {
        index: usize,
        name: String,
        reason: String,
    },
}

/// A single feed source: where to fetch it and what to call it.
///
/// Both fields are guaranteed non-blank (after trimming) once the descriptor
/// has passed through [`FeedRegistry::from_descriptors`].
#[derive(Debug, Clone)]
pub struct FeedDescriptor {
    pub url: String,
    pub name: String,
}

/// Immutable, ordered catalog of feeds, indexed `0..len()`.
///
/// No mutation API is exposed; the registry lives behind an `Arc` for the
/// whole session.
#[derive(Debug)]
pub struct FeedRegistry {
    feeds: Vec<FeedDescriptor>,
}

impl FeedRegistry {
    /// Build a registry, validating every descriptor.
    ///
    /// Trims whitespace from urls and names. Rejects an empty catalog,
    /// blank fields, and urls that do not parse as http/https.
    pub fn from_descriptors(descriptors: Vec<FeedDescriptor>) -> Result<Self, RegistryError> {
        if descriptors.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut feeds = Vec::with_capacity(descriptors.len());
        for (index, descriptor) in descriptors.into_iter().enumerate() {
            let url = descriptor.url.trim().to_string();
            let name = descriptor.name.trim().to_string();

            if url.is_empty() {
                return Err(RegistryError::BlankUrl { index });
            }
            if name.is_empty() {
                return Err(RegistryError::BlankName { index });
            }

            match Url::parse(&url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => {
                    return Err(RegistryError::InvalidUrl {
                        index,
                        name,
                        reason: format!(
                            "unsupported scheme \"{}\" (only http/https allowed)",
                            parsed.scheme()
                        ),
                    });
                }
                Err(e) => {
                    return Err(RegistryError::InvalidUrl {
                        index,
                        name,
                        reason: e.to_string(),
                    });
                }
            }

            feeds.push(FeedDescriptor { url, name });
        }

        Ok(Self { feeds })
    }

    /// Descriptor at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&FeedDescriptor> {
        self.feeds.get(index)
    }

    /// Number of feeds in the catalog. Always at least 1.
    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    /// Always false; an empty registry cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    /// Iterate the catalog in order.
    pub fn iter(&self) -> impl Iterator<Item = &FeedDescriptor> {
        self.feeds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(url: &str, name: &str) -> FeedDescriptor {
        FeedDescriptor {
            url: url.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_valid_catalog_accepted() {
        let registry = FeedRegistry::from_descriptors(vec![
            descriptor("https://a.com/rss", "A"),
            descriptor("https://b.com/rss", "B"),
        ])
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(0).unwrap().name, "A");
        assert_eq!(registry.get(1).unwrap().url, "https://b.com/rss");
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = FeedRegistry::from_descriptors(Vec::new());
        assert!(matches!(result, Err(RegistryError::Empty)));
    }

    #[test]
    fn test_blank_url_rejected() {
        let result = FeedRegistry::from_descriptors(vec![
            descriptor("https://a.com/rss", "A"),
            descriptor("   ", "B"),
        ]);
        assert!(matches!(result, Err(RegistryError::BlankUrl { index: 1 })));
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = FeedRegistry::from_descriptors(vec![descriptor("https://a.com/rss", "\t\n")]);
        assert!(matches!(result, Err(RegistryError::BlankName { index: 0 })));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let registry =
            FeedRegistry::from_descriptors(vec![descriptor("  https://a.com/rss ", " A ")])
                .unwrap();
        assert_eq!(registry.get(0).unwrap().url, "https://a.com/rss");
        assert_eq!(registry.get(0).unwrap().name, "A");
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = FeedRegistry::from_descriptors(vec![descriptor("file:///etc/passwd", "A")]);
        assert!(matches!(result, Err(RegistryError::InvalidUrl { .. })));
    }

    #[test]
    fn test_unparseable_url_rejected() {
        let result = FeedRegistry::from_descriptors(vec![descriptor("not a url", "A")]);
        assert!(matches!(result, Err(RegistryError::InvalidUrl { .. })));
    }

    #[test]
    fn test_every_descriptor_nonblank_after_construction() {
        let registry = FeedRegistry::from_descriptors(vec![
            descriptor("https://a.com/rss", "A"),
            descriptor("http://b.com/feed.xml", "B feed"),
        ])
        .unwrap();

        for feed in registry.iter() {
            assert!(!feed.url.trim().is_empty());
            assert!(!feed.name.trim().is_empty());
        }
    }

    #[test]
    fn test_localhost_urls_allowed() {
        // The catalog may point at local servers (self-hosted aggregators,
        // test fixtures), so no SSRF-style host filtering applies here.
        let registry =
            FeedRegistry::from_descriptors(vec![descriptor("http://127.0.0.1:8080/feed", "Local")])
                .unwrap();
        assert_eq!(registry.len(), 1);
    }
}
