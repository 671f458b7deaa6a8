//! Feed loading orchestration.
//!
//! `FeedLoader` ties the catalog, the HTTP transport, and the display pane
//! together: resolve the descriptor at an index, fetch and parse it, then
//! replace the pane's content in one step. Completion is the resolution of
//! the returned future. It happens exactly once, after rendering has been
//! applied, and it happens on every path because retrieval latency is
//! bounded by the request timeout.
//!
//! On failure the pane is deliberately left untouched: the last good
//! content stays visible and the error travels back on the `Err` arm.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::feed::{fetch_feed, Entry, FetchError};
use crate::registry::FeedRegistry;
use crate::view::FeedPane;

/// Errors surfaced by a load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The index does not name a catalog slot. No network activity happened
    /// and the pane was not touched.
    #[error("Feed index {index} out of range (catalog has {len} feeds)")]
    IndexOutOfRange { index: usize, len: usize },
    /// The transport failed (network, HTTP status, parse, timeout). The
    /// pane was not touched.
    #[error("Failed to load \"{name}\": {source}")]
    Retrieval {
        name: String,
        #[source]
        source: FetchError,
    },
}

/// What a successful load applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub feed_index: usize,
    pub feed_name: String,
    pub entry_count: usize,
}

/// Orchestrates fetch → parse → render for catalog feeds.
///
/// Cheap to clone: the registry is shared and `reqwest::Client` is itself
/// a handle.
#[derive(Clone)]
pub struct FeedLoader {
    registry: Arc<FeedRegistry>,
    client: reqwest::Client,
    timeout: Duration,
}

impl FeedLoader {
    pub fn new(registry: Arc<FeedRegistry>, client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            registry,
            client,
            timeout,
        }
    }

    pub fn registry(&self) -> &FeedRegistry {
        &self.registry
    }

    /// Fetch and parse the feed at `index` without touching any pane.
    ///
    /// This is the retrieval half of a load; `load_into` builds on it.
    pub async fn load_feed(&self, index: usize) -> Result<Vec<Entry>, LoadError> {
        let descriptor = self
            .registry
            .get(index)
            .ok_or(LoadError::IndexOutOfRange {
                index,
                len: self.registry.len(),
            })?;

        tracing::debug!(index, feed = %descriptor.name, url = %descriptor.url, "Loading feed");

        fetch_feed(&self.client, &descriptor.url, self.timeout)
            .await
            .map_err(|source| LoadError::Retrieval {
                name: descriptor.name.clone(),
                source,
            })
    }

    /// Load the feed at `index` and replace `pane`'s content with it.
    ///
    /// The future resolving is the completion signal: by the time the
    /// caller observes it, the render has been fully applied (on `Ok`) or
    /// the pane is guaranteed untouched (on `Err`). Sequential awaited
    /// calls therefore leave the pane reflecting the last call's feed.
    pub async fn load_into(
        &self,
        index: usize,
        pane: &mut FeedPane,
    ) -> Result<LoadSummary, LoadError> {
        let feed_name = self
            .registry
            .get(index)
            .map(|d| d.name.clone())
            .ok_or(LoadError::IndexOutOfRange {
                index,
                len: self.registry.len(),
            })?;

        let entries = self.load_feed(index).await?;
        pane.replace(index, &entries);

        let summary = LoadSummary {
            feed_index: index,
            feed_name,
            entry_count: entries.len(),
        };
        tracing::info!(
            index,
            feed = %summary.feed_name,
            entries = summary.entry_count,
            "Feed loaded"
        );
        Ok(summary)
    }
}
