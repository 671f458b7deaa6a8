//! Central application state and background-task events.
//!
//! `App` owns everything the event loop mutates: the loader, the menu
//! visibility state, the display pane, selection cursors, and the transient
//! status line. Background loads communicate exclusively through
//! [`AppEvent`]s on an mpsc channel; each spawned load sends exactly one
//! `FeedLoaded` event, on success and failure alike.

use anyhow::Result;
use reqwest::redirect::Policy;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::feed::Entry;
use crate::loader::{FeedLoader, LoadError};
use crate::menu::MenuState;
use crate::registry::{FeedDescriptor, FeedRegistry};
use crate::view::FeedPane;

/// Create a custom redirect policy with loop detection and limited hops.
fn create_redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        // Limit to 3 redirects
        if attempt.previous().len() >= 3 {
            return attempt.error("Too many redirects (max 3)");
        }

        // Detect loops
        let url = attempt.url();
        for prev in attempt.previous() {
            if prev.as_str() == url.as_str() {
                return attempt.error("Redirect loop detected");
            }
        }

        attempt.follow()
    })
}

/// Events from background tasks.
pub enum AppEvent {
    /// A spawned load finished. Sent exactly once per load, success or not.
    ///
    /// `generation` is the load counter value at spawn time; the handler
    /// drops events whose generation is not the latest, so a superseded
    /// load cannot overwrite a newer one's content.
    FeedLoaded {
        index: usize,
        generation: u64,
        result: Result<Vec<Entry>, LoadError>,
    },
}

/// Central application state.
pub struct App {
    pub loader: FeedLoader,

    /// Menu visibility; toggled synchronously by input handling.
    pub menu: MenuState,
    /// The display region for the currently loaded feed.
    pub pane: FeedPane,

    /// Cursor in the feed menu.
    pub selected_feed: usize,
    /// Cursor in the entries pane.
    pub selected_entry: usize,

    /// Feed index a load is currently in flight for, if any.
    pub loading: Option<usize>,

    /// Generation counter for loads.
    ///
    /// Incremented each time a new load is spawned. The spawned task echoes
    /// this generation in its completion event; the handler rejects events
    /// with a stale generation so rapid re-selection cannot interleave
    /// (last writer wins).
    pub load_generation: u64,

    /// Status message with expiry.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,
}

impl App {
    pub fn new(registry: Arc<FeedRegistry>, fetch_timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .redirect(create_redirect_policy())
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(fetch_timeout)
            .build()?;

        let loader = FeedLoader::new(registry, http_client, fetch_timeout);

        Ok(Self {
            loader,
            menu: MenuState::new(),
            pane: FeedPane::new(),
            selected_feed: 0,
            selected_entry: 0,
            loading: None,
            load_generation: 0,
            status_message: None,
            needs_redraw: true,
        })
    }

    pub fn registry(&self) -> &FeedRegistry {
        self.loader.registry()
    }

    /// Get the currently selected feed descriptor (bounds-checked).
    pub fn selected_feed_descriptor(&self) -> Option<&FeedDescriptor> {
        self.registry().get(self.selected_feed)
    }

    /// Flip menu visibility. Synchronous: the next render reflects it.
    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
        self.needs_redraw = true;
    }

    /// Move the feed-menu cursor by `delta`, clamped to the catalog.
    pub fn move_feed_selection(&mut self, delta: isize) {
        let len = self.registry().len();
        let current = self.selected_feed as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.selected_feed = next as usize;
    }

    /// Move the entry cursor by `delta`, clamped to the pane's content.
    pub fn move_entry_selection(&mut self, delta: isize) {
        if self.pane.is_empty() {
            self.selected_entry = 0;
            return;
        }
        let len = self.pane.len();
        let current = self.selected_entry as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.selected_entry = next as usize;
    }

    /// Spawn a background load of the feed at `index`.
    ///
    /// The task fetches off the event loop and sends exactly one
    /// `AppEvent::FeedLoaded` with this load's generation; rendering is
    /// applied by the event handler when the event arrives, so state is
    /// only ever mutated on the event loop.
    ///
    /// An out-of-range index takes the same path: the loader reports it
    /// in the completion event and nothing is rendered.
    pub fn spawn_load(&mut self, index: usize, event_tx: &mpsc::Sender<AppEvent>) {
        self.load_generation = self.load_generation.wrapping_add(1);
        let generation = self.load_generation;
        self.loading = Some(index);
        self.needs_redraw = true;

        let loader = self.loader.clone();
        let tx = event_tx.clone();

        tracing::debug!(index, generation, "Spawning feed load task");

        tokio::spawn(async move {
            let result = loader.load_feed(index).await;
            let event = AppEvent::FeedLoaded {
                index,
                generation,
                result,
            };
            if tx.send(event).await.is_err() {
                tracing::warn!(index, "Failed to send load result (receiver dropped)");
            }
        });
    }

    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired (older than 3 seconds).
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}
