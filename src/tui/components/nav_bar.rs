// Navigation bar component
//
// Renders the fixed header: the owner's name as the logo and one link per
// section, with the section currently in view highlighted (scroll spy).

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::sections::SectionId;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the navigation bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let mut spans: Vec<Span> = vec![
        Span::styled(
            format!(" {} ", app.portfolio.personal.name),
            Style::default().fg(theme.logo).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│", Style::default().fg(theme.border)),
    ];

    if bp.at_least(Breakpoint::Normal) {
        // Full link row: every section, active one highlighted
        for (i, &section) in SectionId::all().iter().enumerate() {
            let active = section == app.active_section;
            let style = if active {
                Style::default()
                    .fg(theme.nav_active)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.nav_inactive)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!("{} {}", i + 1, section.title()), style));
            spans.push(Span::raw(" "));
        }
    } else {
        // Narrow terminals: just the active section and its position
        spans.push(Span::styled(
            format!(
                " {} ({}/{}) ",
                app.active_section.title(),
                app.active_section.index() + 1,
                SectionId::all().len()
            ),
            Style::default()
                .fg(theme.nav_active)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(nav, area);
}
