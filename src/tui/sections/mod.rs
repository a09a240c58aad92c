// Page sections
//
// The portfolio is a single vertical page assembled from six sections.
// Each section builds pre-wrapped, pre-styled lines for the current width;
// assembly records where every section landed so the visibility sweep and
// the scroll spy can work with measured regions.
//
// Sections are independent: each consumes its own FadeTracker signal and
// nothing here coordinates between them.

mod about;
mod contact;
mod education;
mod home;
mod projects;
mod skills;

use crate::content::Portfolio;
use crate::form::ContactForm;
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use crate::tui::wrap::wrap;
use crate::visibility::PageRegion;
use ratatui::text::{Line, Span};

/// The six page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Education,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Home,
            SectionId::About,
            SectionId::Education,
            SectionId::Skills,
            SectionId::Projects,
            SectionId::Contact,
        ]
    }

    /// Nav label
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in page order
    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    /// Map the 1-6 jump keys to a section
    pub fn from_digit(c: char) -> Option<Self> {
        let idx = c.to_digit(10)? as usize;
        Self::all().get(idx.checked_sub(1)?).copied()
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Everything a section needs to build its lines
pub struct PageContext<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
    /// Usable text columns
    pub width: usize,
    pub breakpoint: Breakpoint,
    /// Frame counter for the role rotation and the submit spinner
    pub animation_frame: usize,
    pub form: &'a ContactForm,
    /// Whether keystrokes currently go to the form (cursor rendering)
    pub form_active: bool,
}

/// The assembled page: all lines plus where each section landed
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub regions: Vec<(SectionId, PageRegion)>,
}

impl Page {
    /// Measured region of one section
    pub fn region(&self, id: SectionId) -> Option<PageRegion> {
        self.regions
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, region)| *region)
    }
}

/// Blank rows between consecutive sections (not part of any region)
const SECTION_GAP: usize = 2;

/// Assemble the full page for the current frame
pub fn build_page(ctx: &PageContext) -> Page {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut regions = Vec::new();

    for (i, &section) in SectionId::all().iter().enumerate() {
        if i > 0 {
            for _ in 0..SECTION_GAP {
                lines.push(Line::default());
            }
        }

        let top = lines.len();
        let body = match section {
            SectionId::Home => home::build(ctx),
            SectionId::About => about::build(ctx),
            SectionId::Education => education::build(ctx),
            SectionId::Skills => skills::build(ctx),
            SectionId::Projects => projects::build(ctx),
            SectionId::Contact => contact::build(ctx),
        };
        regions.push((section, PageRegion::new(top, body.len())));
        lines.extend(body);
    }

    Page { lines, regions }
}

/// Scroll spy: the section owning the anchor line
///
/// Walks the regions in page order and keeps the last one whose top is at
/// or above the anchor - last writer wins, nothing more subtle than that.
pub fn active_section_at(regions: &[(SectionId, PageRegion)], anchor: usize) -> SectionId {
    let mut active = SectionId::Home;
    for (id, region) in regions {
        if region.top <= anchor {
            active = *id;
        }
    }
    active
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared line-building helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Section heading with an accented tail word ("Get In" + "Touch")
pub(crate) fn heading(prefix: &str, highlight: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", prefix), theme.heading_style()),
        Span::styled(highlight.to_string(), theme.heading_accent_style()),
    ])
}

/// Divider under a heading
pub(crate) fn divider(width: usize, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(width.min(40)),
        ratatui::style::Style::default().fg(theme.border),
    ))
}

/// Wrapped prose, one styled Line per row
pub(crate) fn prose(
    text: &str,
    width: usize,
    style: ratatui::style::Style,
) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::ThemeKind;

    fn test_ctx<'a>(
        portfolio: &'a Portfolio,
        theme: &'a Theme,
        form: &'a ContactForm,
    ) -> PageContext<'a> {
        PageContext {
            portfolio,
            theme,
            width: 80,
            breakpoint: Breakpoint::Normal,
            animation_frame: 0,
            form,
            form_active: false,
        }
    }

    #[test]
    fn page_regions_are_ordered_and_disjoint() {
        let portfolio = Portfolio::default();
        let theme = ThemeKind::Dark.theme();
        let form = ContactForm::new();
        let page = build_page(&test_ctx(&portfolio, &theme, &form));

        assert_eq!(page.regions.len(), SectionId::all().len());

        let mut prev_bottom = 0;
        for (_, region) in &page.regions {
            assert!(region.top >= prev_bottom);
            assert!(region.height > 0);
            prev_bottom = region.bottom();
        }
        assert!(prev_bottom <= page.lines.len());
    }

    #[test]
    fn every_section_has_a_region() {
        let portfolio = Portfolio::default();
        let theme = ThemeKind::Dark.theme();
        let form = ContactForm::new();
        let page = build_page(&test_ctx(&portfolio, &theme, &form));

        for &section in SectionId::all() {
            assert!(page.region(section).is_some(), "{:?} missing", section);
        }
    }

    #[test]
    fn narrow_width_still_builds() {
        let portfolio = Portfolio::default();
        let theme = ThemeKind::Dark.theme();
        let form = ContactForm::new();
        let mut ctx = test_ctx(&portfolio, &theme, &form);
        ctx.width = 30;
        ctx.breakpoint = Breakpoint::Compact;

        let page = build_page(&ctx);
        assert!(!page.lines.is_empty());
    }

    #[test]
    fn scroll_spy_is_last_writer_wins() {
        let regions = vec![
            (SectionId::Home, PageRegion::new(0, 10)),
            (SectionId::About, PageRegion::new(12, 10)),
            (SectionId::Education, PageRegion::new(24, 10)),
        ];

        assert_eq!(active_section_at(&regions, 0), SectionId::Home);
        assert_eq!(active_section_at(&regions, 11), SectionId::Home);
        assert_eq!(active_section_at(&regions, 12), SectionId::About);
        assert_eq!(active_section_at(&regions, 100), SectionId::Education);
    }

    #[test]
    fn digit_keys_map_to_sections() {
        assert_eq!(SectionId::from_digit('1'), Some(SectionId::Home));
        assert_eq!(SectionId::from_digit('6'), Some(SectionId::Contact));
        assert_eq!(SectionId::from_digit('7'), None);
        assert_eq!(SectionId::from_digit('0'), None);
        assert_eq!(SectionId::from_digit('x'), None);
    }

    #[test]
    fn section_cycle_wraps() {
        assert_eq!(SectionId::Contact.next(), SectionId::Home);
        assert_eq!(SectionId::Home.prev(), SectionId::Contact);
    }
}
