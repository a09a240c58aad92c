// Log overlay component
//
// A centered panel over the page showing the tail of the in-memory log
// buffer, color-coded by level. Toggled with `l`; purely informational.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Render the log overlay centered over `area`
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let overlay = centered_rect(area, 70, 60);

    let inner_height = overlay.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.snapshot();
    let tail_start = entries.len().saturating_sub(inner_height);

    let items: Vec<ListItem> = entries[tail_start..]
        .iter()
        .map(|entry| {
            let text = format!(
                " {} {:5} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str(),
                entry.message
            );
            ListItem::new(text).style(theme.log_level_style(entry.level))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.background))
            .title(format!(" Logs ({}) ", app.log_buffer.len()))
            .title_bottom(" l to close "),
    );

    f.render_widget(Clear, overlay);
    f.render_widget(list, overlay);
}

/// Rect centered in `area` taking the given percentages of each dimension
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
