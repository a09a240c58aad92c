// Projects section - project cards with tech tags and links

use super::{divider, heading, PageContext};
use crate::tui::wrap::wrap;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub fn build(ctx: &PageContext) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let mut lines = Vec::new();

    lines.push(heading("My", "Projects", theme));
    lines.push(divider(ctx.width, theme));

    let body_width = ctx.width.saturating_sub(2).max(10);

    for (i, project) in ctx.portfolio.projects.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }

        lines.push(Line::from(vec![
            Span::styled("▪ ", Style::default().fg(theme.accent)),
            Span::styled(
                project.title.clone(),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        for row in wrap(&project.description, body_width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", row),
                theme.base_style(),
            )));
        }

        if !project.tech.is_empty() {
            let tags = project
                .tech
                .iter()
                .map(|t| format!("[{}]", t))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(Line::from(Span::styled(
                format!("  {}", tags),
                Style::default().fg(theme.tech_tag),
            )));
        }

        if let Some(link) = &project.link {
            lines.push(Line::from(Span::styled(
                format!("  ↗ {}", link),
                Style::default().fg(theme.link),
            )));
        }
        if let Some(source) = &project.source {
            lines.push(Line::from(Span::styled(
                format!("  ⌥ {}", source),
                Style::default().fg(theme.link),
            )));
        }
    }

    lines
}
