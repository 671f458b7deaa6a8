//! Render functions for the TUI.
//!
//! Layout is driven by menu visibility: when the menu is hidden the entry
//! pane takes the full width, when visible a feed-menu sidebar appears on
//! the left. The visibility flag is read on the same tick the toggle ran,
//! so the drawn state always mirrors `MenuState`.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use super::{entries, menu, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 8;

/// Main render dispatch function.
///
/// Handles terminal size validation before rendering.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Minimum terminal size check for usable UI
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    // Two rows: main panels, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    render_main_panels(f, app, chunks[0]);
    status::render(f, app, chunks[1]);
}

/// Render the main panels (menu + entries).
///
/// When the menu is visible, the left side holds the feed menu (30%).
/// Otherwise the entries pane takes the full width.
fn render_main_panels(f: &mut Frame, app: &App, area: Rect) {
    if app.menu.is_visible() {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(area);

        menu::render(f, app, main_chunks[0]);
        entries::render(f, app, main_chunks[1]);
    } else {
        entries::render(f, app, area);
    }
}
