use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a title to `max_width` display columns, appending an ellipsis.
///
/// Width-aware so wide characters don't overflow the pane border.
fn truncate_title(title: &str, max_width: usize) -> String {
    if title.width() <= max_width {
        return title.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in title.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(3) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Render the entry list panel.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.pane.is_empty() {
        let hint = if app.loading.is_some() {
            "Loading..."
        } else if app.pane.loaded_feed().is_some() {
            "Feed has no entries"
        } else {
            "No feed loaded. Press m for the menu, Enter to load"
        };
        vec![ListItem::new(hint)]
    } else {
        app.pane
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == app.selected_entry {
                    Style::default().bg(Color::DarkGray).fg(Color::White)
                } else {
                    Style::default()
                };

                // Leave room for the date column
                let max_title_width = area.width.saturating_sub(16) as usize;
                let title = truncate_title(&entry.title, max_title_width);

                let mut spans = vec![Span::styled(title, style)];
                if let Some(label) = &entry.published_label {
                    spans.push(Span::styled(
                        format!("  {}", label),
                        Style::default().fg(Color::DarkGray),
                    ));
                }

                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let title = match app.pane.loaded_feed().and_then(|i| app.registry().get(i)) {
        Some(feed) => format!("Entries - {}", feed.name),
        None => "Entries".to_string(),
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, area);
}
