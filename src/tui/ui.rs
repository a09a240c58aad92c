// UI rendering - called on every frame
//
// Frame order: assemble the page for the current width, refresh scroll
// dimensions, run the visibility sweep against the measured regions, fade
// out the sections whose trackers say hidden, then draw the visible window
// plus the fixed chrome and overlays.

use crate::tui::app::App;
use crate::tui::components::{logs_overlay, nav_bar, scrollbar, status_bar};
use crate::tui::layout::Breakpoint;
use crate::tui::sections::{self, PageContext};
use crate::visibility::{FadeClass, PageRegion};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Paragraph},
    Frame,
};

/// Main render function
pub fn draw(f: &mut Frame, app: &mut App) {
    // Theme background for the whole frame
    let bg = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // nav bar
            Constraint::Min(5),    // page
            Constraint::Length(2), // status bar
        ])
        .split(f.area());

    draw_page(f, chunks[1], app);
    nav_bar::render(f, chunks[0], app);
    status_bar::render(f, chunks[2], app);

    if app.show_logs {
        logs_overlay::render(f, f.area(), app);
    }
    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

/// Layout, sweep, fade, and draw the scrolling page
fn draw_page(f: &mut Frame, area: Rect, app: &mut App) {
    // One column of left margin, one reserved for the scrollbar
    let text_width = area.width.saturating_sub(3).max(10) as usize;
    let viewport_height = area.height as usize;

    let mut page = {
        let ctx = PageContext {
            portfolio: &app.portfolio,
            theme: &app.theme,
            width: text_width,
            breakpoint: Breakpoint::from_width(area.width),
            animation_frame: app.animation_frame,
            form: &app.form,
            form_active: app.form_active,
        };
        sections::build_page(&ctx)
    };

    app.scroll
        .update_dimensions(page.lines.len(), viewport_height);

    // The scroll window is the viewport the observer measures against
    let viewport = PageRegion::new(app.scroll.offset(), viewport_height);
    app.sweep_visibility(viewport, &page.regions);

    // The tracker only supplies a fade class; presentation is decided here.
    // Faded-out sections get a uniform dim restyle across every span.
    let faded = app.theme.faded_style();
    for (sid, region) in &page.regions {
        if app.fade_class(*sid) == FadeClass::FadeOut {
            for line in &mut page.lines[region.top..region.bottom()] {
                for span in &mut line.spans {
                    span.style = faded;
                }
            }
        }
    }

    let (start, end) = app.scroll.visible_range();
    let visible: Vec<Line> = page.lines[start..end]
        .iter()
        .cloned()
        .map(|line| {
            let mut padded = line;
            padded.spans.insert(0, ratatui::text::Span::raw(" "));
            padded
        })
        .collect();

    let body = Paragraph::new(Text::from(visible));
    f.render_widget(body, area);

    scrollbar::render_scrollbar(f, area, &app.scroll);
}
