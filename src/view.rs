//! The display region for feed content.
//!
//! `FeedPane` is the in-process analog of the container the entries are
//! shown in: it owns the rendered entry list for exactly one feed at a
//! time, and each load replaces that list wholesale; there is no
//! incremental patching. Replacement is a single assignment of a fully
//! built list, so an observer never sees a half-updated pane.

use chrono::DateTime;
use sha2::{Digest, Sha256};

use crate::feed::Entry;

/// One entry as shown in the pane.
///
/// Derived from [`Entry`] at replace time; the widget layer reads these
/// fields verbatim and only handles truncation and styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub guid: String,
    pub title: String,
    pub link: Option<String>,
    /// Publish time formatted for display (e.g. "Mar 14 2026"), when known.
    pub published_label: Option<String>,
    pub summary: Option<String>,
}

impl RenderedEntry {
    fn from_entry(entry: &Entry) -> Self {
        let published_label = entry
            .published
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .map(|dt| dt.format("%b %d %Y").to_string());

        Self {
            guid: entry.guid.clone(),
            title: entry.title.clone(),
            link: entry.link.clone(),
            published_label,
            summary: entry.summary.clone(),
        }
    }
}

/// The region of the UI that shows one feed's entries.
#[derive(Debug, Default)]
pub struct FeedPane {
    loaded_feed: Option<usize>,
    entries: Vec<RenderedEntry>,
}

impl FeedPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all content with `entries`, rendered for feed `feed_index`.
    ///
    /// The new list is built in full before the swap; the previous content
    /// is gone in the same assignment the new content appears in.
    pub fn replace(&mut self, feed_index: usize, entries: &[Entry]) {
        let rendered: Vec<RenderedEntry> = entries.iter().map(RenderedEntry::from_entry).collect();
        self.entries = rendered;
        self.loaded_feed = Some(feed_index);
    }

    /// Drop all content, returning the pane to its initial state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.loaded_feed = None;
    }

    /// Which feed the current content came from, if any load has applied.
    pub fn loaded_feed(&self) -> Option<usize> {
        self.loaded_feed
    }

    pub fn entries(&self) -> &[RenderedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Digest of the rendered content, for change detection.
    ///
    /// Two panes showing the same entries for the same feed hash equal;
    /// any observable difference in rendered content changes the digest.
    pub fn signature(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        if let Some(feed) = self.loaded_feed {
            hasher.update(feed.to_le_bytes());
        }
        for entry in &self.entries {
            hasher.update(entry.guid.as_bytes());
            hasher.update([0]);
            hasher.update(entry.title.as_bytes());
            hasher.update([0]);
            hasher.update(entry.link.as_deref().unwrap_or("").as_bytes());
            hasher.update([0]);
            hasher.update(entry.published_label.as_deref().unwrap_or("").as_bytes());
            hasher.update([0]);
            hasher.update(entry.summary.as_deref().unwrap_or("").as_bytes());
            hasher.update([0xff]);
        }
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(guid: &str, title: &str) -> Entry {
        Entry {
            guid: guid.to_string(),
            title: title.to_string(),
            link: Some(format!("https://example.com/{}", guid)),
            published: Some(1_700_000_000),
            summary: Some("Test summary".to_string()),
        }
    }

    #[test]
    fn test_new_pane_is_empty() {
        let pane = FeedPane::new();
        assert!(pane.is_empty());
        assert_eq!(pane.loaded_feed(), None);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut pane = FeedPane::new();
        pane.replace(0, &[entry("a", "Old 1"), entry("b", "Old 2")]);
        assert_eq!(pane.len(), 2);

        pane.replace(1, &[entry("c", "New")]);
        assert_eq!(pane.len(), 1);
        assert_eq!(pane.entries()[0].title, "New");
        assert_eq!(pane.loaded_feed(), Some(1));
        // Nothing from the previous load survives
        assert!(pane.entries().iter().all(|e| e.guid != "a" && e.guid != "b"));
    }

    #[test]
    fn test_signature_changes_with_content() {
        let mut pane = FeedPane::new();
        pane.replace(0, &[entry("a", "First")]);
        let before = pane.signature();

        pane.replace(1, &[entry("b", "Second")]);
        assert_ne!(pane.signature(), before);
    }

    #[test]
    fn test_signature_stable_for_same_content() {
        let mut a = FeedPane::new();
        let mut b = FeedPane::new();
        a.replace(0, &[entry("a", "First")]);
        b.replace(0, &[entry("a", "First")]);
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn test_signature_distinguishes_feed_index() {
        // Identical entry lists loaded from different catalog slots still
        // read as different content.
        let mut a = FeedPane::new();
        let mut b = FeedPane::new();
        a.replace(0, &[entry("a", "Same")]);
        b.replace(1, &[entry("a", "Same")]);
        assert_ne!(a.signature(), b.signature());
    }

    #[test]
    fn test_published_label_formatting() {
        let mut pane = FeedPane::new();
        pane.replace(0, &[entry("a", "Dated")]);
        let label = pane.entries()[0].published_label.as_deref().unwrap();
        assert_eq!(label, "Nov 14 2023");
    }

    #[test]
    fn test_clear_resets_state() {
        let mut pane = FeedPane::new();
        pane.replace(0, &[entry("a", "First")]);
        pane.clear();
        assert!(pane.is_empty());
        assert_eq!(pane.loaded_feed(), None);
    }

    #[test]
    fn test_replace_with_empty_list_clears_content() {
        let mut pane = FeedPane::new();
        pane.replace(0, &[entry("a", "First")]);
        pane.replace(0, &[]);
        assert!(pane.is_empty());
        // Still attributed to the feed that loaded empty
        assert_eq!(pane.loaded_feed(), Some(0));
    }
}
