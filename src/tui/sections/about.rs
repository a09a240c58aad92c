// About section - role title, bio paragraphs, stat tiles

use super::{divider, heading, prose, PageContext};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub fn build(ctx: &PageContext) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let about = &ctx.portfolio.about;
    let mut lines = Vec::new();

    lines.push(heading("About", "Me", theme));
    lines.push(divider(ctx.width, theme));
    lines.push(Line::from(Span::styled(
        about.role_title.clone(),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    for (i, paragraph) in about.paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(prose(paragraph, ctx.width, theme.base_style()));
    }

    if !about.stats.is_empty() {
        lines.push(Line::default());
        let mut spans: Vec<Span> = Vec::new();
        for (i, stat) in about.stats.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    "  │  ",
                    Style::default().fg(theme.border),
                ));
            }
            spans.push(Span::styled(
                stat.value.clone(),
                Style::default()
                    .fg(theme.heading_accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", stat.label),
                theme.base_style(),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}
