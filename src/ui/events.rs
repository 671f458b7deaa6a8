//! Application event handling.
//!
//! This module processes load completion events from background tasks.
//! The pane is only ever mutated here, on the event loop, which is what
//! makes the replace atomic from the UI's point of view: the frame drawn
//! after this handler runs shows the new content in full or the old
//! content in full, never a mixture.

use crate::app::{App, AppEvent};

/// Handle application events from background tasks.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::FeedLoaded {
            index,
            generation,
            result,
        } => {
            // A newer load has been spawned since this one; its completion
            // is the one that counts (last writer wins). Drop the render,
            // keep the pane.
            if generation != app.load_generation {
                tracing::debug!(
                    index,
                    generation,
                    latest = app.load_generation,
                    "Dropping stale load completion"
                );
                return;
            }

            app.loading = None;

            match result {
                Ok(entries) => {
                    app.pane.replace(index, &entries);
                    app.selected_entry = 0;
                    let name = app
                        .registry()
                        .get(index)
                        .map(|d| d.name.clone())
                        .unwrap_or_default();
                    app.set_status(format!("{}: {} entries", name, entries.len()));
                }
                Err(e) => {
                    tracing::warn!(index, error = %e, "Feed load failed");
                    app.set_status(format!("Error: {}", e));
                }
            }
        }
    }
}
