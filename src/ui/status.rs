use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::borrow::Cow;

/// Render the status bar
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    // Guard against zero-width/height areas
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Use Cow to avoid allocations for static strings and borrowed status messages
    let text: Cow<'_, str> = if let Some(index) = app.loading {
        let name = app
            .registry()
            .get(index)
            .map(|d| d.name.as_str())
            .unwrap_or("?");
        Cow::Owned(format!("Loading {}...", name))
    } else if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.menu.is_visible() {
        Cow::Borrowed("[j/k]select [Enter]load [m]close menu [q]uit")
    } else {
        Cow::Borrowed("[m]enu [j/k]select [r]eload [o]pen [q]uit")
    };

    let style = Style::default().bg(Color::DarkGray).fg(Color::White);

    let paragraph = Paragraph::new(text).style(style);
    f.render_widget(paragraph, area);
}
