// Home section - greeting, name, rotating role line, summary

use super::{prose, PageContext};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Frames per role before rotating to the next one (ticks at 5 fps)
const ROLE_ROTATION_FRAMES: usize = 15;

pub fn build(ctx: &PageContext) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let personal = &ctx.portfolio.personal;
    let mut lines = Vec::new();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        personal.greeting.clone(),
        theme.base_style(),
    )));
    lines.push(Line::from(Span::styled(
        personal.name.clone(),
        Style::default()
            .fg(theme.heading_accent)
            .add_modifier(Modifier::BOLD),
    )));

    // Rotate through the configured roles as frames tick by
    if !personal.roles.is_empty() {
        let idx = (ctx.animation_frame / ROLE_ROTATION_FRAMES) % personal.roles.len();
        lines.push(Line::from(vec![
            Span::styled("▸ ", Style::default().fg(theme.accent)),
            Span::styled(
                personal.roles[idx].clone(),
                Style::default().fg(theme.accent),
            ),
        ]));
    }

    lines.push(Line::default());
    lines.extend(prose(&personal.summary, ctx.width, theme.base_style()));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "scroll to explore ↓",
        Style::default().fg(theme.placeholder),
    )));

    lines
}
