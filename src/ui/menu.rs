use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the feed menu panel.
///
/// Only called while the menu is visible; the layout in `render` skips it
/// entirely when hidden.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .registry()
        .iter()
        .enumerate()
        .map(|(i, feed)| {
            let style = if i == app.selected_feed {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else if app.pane.loaded_feed() == Some(i) {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            // Spinner marker while this feed's load is in flight
            let line = if app.loading == Some(i) {
                Line::from(vec![
                    Span::styled("⟳ ", Style::default().fg(Color::Yellow)),
                    Span::styled(feed.name.clone(), style),
                ])
            } else {
                Line::from(Span::styled(feed.name.clone(), style))
            };

            ListItem::new(line)
        })
        .collect();

    let title = format!("Feeds ({})", app.registry().len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title),
    );

    f.render_widget(list, area);
}
