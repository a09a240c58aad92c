// Headless mode - render the page once to stdout
//
// Used when FOLIO_NO_TUI is set or no terminal is available. There is no
// scroll viewport here, so there is no intersection primitive either: every
// section runs on the tracker fallback and reports permanently visible.

use crate::content::Portfolio;
use crate::form::ContactForm;
use crate::tui::layout::Breakpoint;
use crate::tui::sections::{self, PageContext, SectionId};
use crate::tui::theme::Theme;
use crate::visibility::FadeTracker;
use anyhow::{Context, Result};
use std::io::Write;

/// Render the whole page and write it to stdout
pub fn run(portfolio: &Portfolio, theme: &Theme) -> Result<()> {
    let width = crossterm::terminal::size().map(|(w, _)| w).unwrap_or(80);
    let output = render_page(portfolio, theme, width);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write page to stdout")?;
    Ok(())
}

/// Build the full page as plain text
///
/// Sections are included according to their fade signal; with no
/// intersection source every tracker falls back to visible, so the whole
/// page prints.
pub fn render_page(portfolio: &Portfolio, theme: &Theme, width: u16) -> String {
    let trackers: Vec<(SectionId, FadeTracker)> = SectionId::all()
        .iter()
        .map(|&id| (id, FadeTracker::always_visible()))
        .collect();

    let form = ContactForm::new();
    let ctx = PageContext {
        portfolio,
        theme,
        width: width.saturating_sub(2).max(20) as usize,
        breakpoint: Breakpoint::from_width(width),
        animation_frame: 0,
        form: &form,
        form_active: false,
    };
    let page = sections::build_page(&ctx);

    let mut out = String::new();
    for (sid, region) in &page.regions {
        let visible = trackers
            .iter()
            .find(|(id, _)| id == sid)
            .map(|(_, t)| t.is_visible())
            .unwrap_or(true);
        if !visible {
            continue;
        }

        for line in &page.lines[region.top..region.bottom()] {
            for span in &line.spans {
                out.push_str(span.content.as_ref());
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::ThemeKind;

    #[test]
    fn headless_page_contains_every_section() {
        let portfolio = Portfolio::default();
        let theme = ThemeKind::Dark.theme();
        let text = render_page(&portfolio, &theme, 80);

        // All six sections print under the visibility fallback
        assert!(text.contains(&portfolio.personal.name));
        assert!(text.contains("About Me"));
        assert!(text.contains("My Journey"));
        assert!(text.contains("My Skills"));
        assert!(text.contains("My Projects"));
        assert!(text.contains("Get In Touch"));
        assert!(text.contains(&portfolio.contact.email));
    }

    #[test]
    fn headless_respects_narrow_widths() {
        let portfolio = Portfolio::default();
        let theme = ThemeKind::Dark.theme();
        let text = render_page(&portfolio, &theme, 40);
        assert!(!text.is_empty());
    }
}
