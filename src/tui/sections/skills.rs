// Skills section - proficiency gauges per skill group

use super::{divider, heading, PageContext};
use crate::tui::layout::Breakpoint;
use crate::tui::wrap::truncate_to_width;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

pub fn build(ctx: &PageContext) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let mut lines = Vec::new();

    lines.push(heading("My", "Skills", theme));
    lines.push(divider(ctx.width, theme));

    // Narrow terminals get tighter columns
    let (name_width, bar_width) = if ctx.breakpoint.at_least(Breakpoint::Normal) {
        (24, 20)
    } else {
        (14, 10)
    };

    for (i, group) in ctx.portfolio.skills.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            group.title.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));

        for skill in &group.skills {
            let level = skill.level.min(100) as usize;
            let filled = level * bar_width / 100;

            let name = truncate_to_width(&skill.name, name_width);
            let pad = " ".repeat(name_width.saturating_sub(name.width()));

            lines.push(Line::from(vec![
                Span::styled(format!("{}{}  ", name, pad), theme.base_style()),
                Span::styled(
                    "█".repeat(filled),
                    Style::default().fg(theme.gauge_filled),
                ),
                Span::styled(
                    "░".repeat(bar_width - filled),
                    Style::default().fg(theme.gauge_empty),
                ),
                Span::styled(format!(" {:>3}%", level), theme.base_style()),
            ]));
        }
    }

    lines
}
