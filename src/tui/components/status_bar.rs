// Status bar component
//
// Bottom line: scroll position, key hints for the current mode, theme
// name, and uptime. Hints switch when the contact form captures input.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar with position and key hints
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let hints = if app.form_active {
        "Tab next field · ↵ send · Esc leave form"
    } else if bp.at_least(Breakpoint::Wide) {
        "↑↓ scroll · 1-6/Tab jump · ↵ form · y copy email · t theme · l logs · q quit"
    } else {
        "↑↓ scroll · Tab jump · q quit"
    };

    let status_text = if bp.at_least(Breakpoint::Normal) {
        format!(
            " {} {}% │ {} │ {} │ {}",
            app.active_section.title(),
            app.scroll.percent(),
            hints,
            app.theme_kind.name(),
            app.uptime(),
        )
    } else {
        format!(" {}% │ {}", app.scroll.percent(), hints)
    };

    let status = Paragraph::new(status_text)
        .style(app.theme.status_style())
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
