//! Keyboard input handling.
//!
//! Key dispatch depends on menu visibility: while the menu is open, the
//! vertical movement keys drive the feed cursor; while it is hidden they
//! drive the entry cursor. The menu toggle itself (`m`) is a pure state
//! flip handled inline; it cannot fail and takes effect on the next frame.

use crate::app::{App, AppEvent};
use crate::ui::Action;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    match code {
        KeyCode::Char('q') => return Ok(Action::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(Action::Quit);
        }

        // Menu toggle: synchronous flip, reflected by the next render
        KeyCode::Char('m') => app.toggle_menu(),

        KeyCode::Char('j') | KeyCode::Down => {
            if app.menu.is_visible() {
                app.move_feed_selection(1);
            } else {
                app.move_entry_selection(1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.menu.is_visible() {
                app.move_feed_selection(-1);
            } else {
                app.move_entry_selection(-1);
            }
        }
        KeyCode::Char('g') | KeyCode::Home => {
            if app.menu.is_visible() {
                app.selected_feed = 0;
            } else {
                app.selected_entry = 0;
            }
        }
        KeyCode::Char('G') | KeyCode::End => {
            if app.menu.is_visible() {
                app.selected_feed = app.registry().len().saturating_sub(1);
            } else {
                app.selected_entry = app.pane.len().saturating_sub(1);
            }
        }

        // Load the feed under the menu cursor
        KeyCode::Enter => {
            app.spawn_load(app.selected_feed, event_tx);
        }

        // Reload whichever feed the pane currently shows (or the cursor's
        // feed when nothing has loaded yet)
        KeyCode::Char('r') => {
            let index = app.pane.loaded_feed().unwrap_or(app.selected_feed);
            app.spawn_load(index, event_tx);
        }

        // Open the selected entry's link in the system browser
        KeyCode::Char('o') => {
            if let Some(entry) = app.pane.entries().get(app.selected_entry) {
                match &entry.link {
                    Some(link) => {
                        if let Err(e) = open::that(link) {
                            tracing::warn!(link = %link, error = %e, "Failed to open browser");
                            app.set_status("Failed to open browser");
                        }
                    }
                    None => app.set_status("Entry has no link"),
                }
            }
        }

        _ => {}
    }

    Ok(Action::Continue)
}
