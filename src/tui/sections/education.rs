// Education section - education and experience timelines

use super::{divider, heading, PageContext};
use crate::content::TimelineEntry;
use crate::tui::theme::Theme;
use crate::tui::wrap::wrap;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub fn build(ctx: &PageContext) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let mut lines = Vec::new();

    lines.push(heading("My", "Journey", theme));
    lines.push(divider(ctx.width, theme));

    push_timeline(&mut lines, "Education", &ctx.portfolio.education, ctx, theme);
    lines.push(Line::default());
    push_timeline(
        &mut lines,
        "Experience",
        &ctx.portfolio.experience,
        ctx,
        theme,
    );

    lines
}

fn push_timeline(
    lines: &mut Vec<Line<'static>>,
    label: &str,
    entries: &[TimelineEntry],
    ctx: &PageContext,
    theme: &Theme,
) {
    lines.push(Line::from(Span::styled(
        label.to_string(),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )));

    // Descriptions are indented under the timeline rail
    let body_width = ctx.width.saturating_sub(4).max(10);

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled("┃ ", Style::default().fg(theme.border)),
            Span::styled(
                entry.period.clone(),
                Style::default().fg(theme.timeline_period),
            ),
            Span::styled(
                format!("  {}", entry.title),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("┃   ", Style::default().fg(theme.border)),
            Span::styled(
                entry.organization.clone(),
                Style::default()
                    .fg(theme.organization)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
        for row in wrap(&entry.description, body_width) {
            lines.push(Line::from(vec![
                Span::styled("┃   ", Style::default().fg(theme.border)),
                Span::styled(row, theme.base_style()),
            ]));
        }
    }
}
