// TUI application state
//
// Owns everything the render loop draws from: the portfolio content, page
// scroll, one fade tracker per section, the contact form, nav state,
// toasts, and the theme. Input handling and rendering live in sibling
// modules; background tasks talk to this state through AppEvent.

use crate::config::Config;
use crate::content::Portfolio;
use crate::events::AppEvent;
use crate::form::{ContactForm, SubmitState, SUBMIT_DELAY};
use crate::logging::LogBuffer;
use crate::tui::clipboard;
use crate::tui::components::Toast;
use crate::tui::input::InputHandler;
use crate::tui::scroll::ScrollState;
use crate::tui::sections::{self, SectionId};
use crate::tui::theme::{Theme, ThemeKind};
use crate::visibility::{FadeClass, FadeTracker, IntersectionSource, PageRegion, ViewportObserver};
use std::time::Instant;
use tokio::sync::mpsc;

/// Main application state for the TUI
pub struct App {
    /// Static page content
    pub portfolio: Portfolio,

    /// Page scroll state (viewport origin for visibility sweeps)
    pub scroll: ScrollState,

    /// The host intersection primitive for this terminal
    pub observer: ViewportObserver,

    /// One independent fade tracker per section
    pub trackers: Vec<(SectionId, FadeTracker)>,

    /// Section regions measured during the last layout pass
    pub last_regions: Vec<(SectionId, PageRegion)>,

    /// Section currently highlighted in the nav (scroll spy)
    pub active_section: SectionId,

    /// Contact form state machine
    pub form: ContactForm,

    /// Whether keystrokes are routed to the form
    pub form_active: bool,

    /// Transient notification overlay
    pub toast: Option<Toast>,

    /// Whether the log overlay is open
    pub show_logs: bool,

    /// Log buffer for the overlay
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Frame counter for spinners and the role rotation
    pub animation_frame: usize,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Whether the demo tour is still running
    pub demo_running: bool,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Channel for background tasks to reach the loop
    event_tx: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(
        config: &Config,
        portfolio: Portfolio,
        log_buffer: LogBuffer,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        let theme_kind = ThemeKind::parse(&config.theme);

        // Each section gets its own tracker and subscription; nothing is
        // shared between them
        let mut observer = ViewportObserver::new();
        let trackers: Vec<(SectionId, FadeTracker)> = SectionId::all()
            .iter()
            .map(|&id| {
                let mut tracker = FadeTracker::new(config.fade_threshold);
                tracker.attach(&mut observer);
                (id, tracker)
            })
            .collect();

        Self {
            portfolio,
            scroll: ScrollState::new(),
            observer,
            trackers,
            last_regions: Vec::new(),
            active_section: SectionId::Home,
            form: ContactForm::new(),
            form_active: false,
            toast: None,
            show_logs: false,
            log_buffer,
            should_quit: false,
            start_time: Instant::now(),
            animation_frame: 0,
            theme_kind,
            theme: theme_kind.theme(),
            demo_running: config.demo_mode,
            input_handler: InputHandler::default(),
            event_tx,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Visibility
    // ─────────────────────────────────────────────────────────────────────

    /// Run one visibility sweep against freshly measured regions
    ///
    /// Called after layout, before drawing, so fades apply in the same
    /// frame the crossing happens.
    pub fn sweep_visibility(&mut self, viewport: PageRegion, regions: &[(SectionId, PageRegion)]) {
        let targets: Vec<_> = self
            .trackers
            .iter()
            .filter_map(|(sid, tracker)| {
                let sub = tracker.subscription()?;
                let (_, region) = regions.iter().find(|(id, _)| id == sid)?;
                Some((sub, *region))
            })
            .collect();

        for event in self.observer.sweep(viewport, &targets) {
            for (sid, tracker) in &mut self.trackers {
                let before = tracker.is_visible();
                tracker.apply(&event);
                if tracker.is_visible() != before {
                    tracing::debug!(
                        "Section {:?} {} (ratio {:.2})",
                        sid,
                        if tracker.is_visible() { "shown" } else { "hidden" },
                        event.ratio
                    );
                }
            }
        }

        self.last_regions = regions.to_vec();
        self.update_active_section();
    }

    /// Whether a section's fade signal currently says visible
    pub fn is_section_visible(&self, id: SectionId) -> bool {
        self.trackers
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, tracker)| tracker.is_visible())
            .unwrap_or(true)
    }

    /// Presentation class for a section, derived from its tracker
    pub fn fade_class(&self, id: SectionId) -> FadeClass {
        self.trackers
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, tracker)| tracker.fade_class())
            .unwrap_or(FadeClass::FadeIn)
    }

    /// Release every subscription; called once on shutdown
    pub fn release_trackers(&mut self) {
        for (_, tracker) in &mut self.trackers {
            tracker.release(&mut self.observer);
        }
        self.observer.disconnect();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Scroll spy: re-derive the active nav link from the scroll position
    fn update_active_section(&mut self) {
        // Anchor a couple of lines into the viewport so a section counts
        // as soon as its heading clears the top edge
        let anchor = self.scroll.offset() + 2;
        self.active_section = sections::active_section_at(&self.last_regions, anchor);
    }

    /// Jump so the section's first line sits at the top of the viewport
    pub fn jump_to(&mut self, id: SectionId) {
        if let Some((_, region)) = self.last_regions.iter().find(|(sid, _)| *sid == id) {
            self.scroll.scroll_to(region.top);
        }
    }

    pub fn jump_next_section(&mut self) {
        self.jump_to(self.active_section.next());
    }

    pub fn jump_prev_section(&mut self) {
        self.jump_to(self.active_section.prev());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Form
    // ─────────────────────────────────────────────────────────────────────

    /// Validate and, if clean, kick off the simulated round trip
    pub fn submit_form(&mut self) {
        if self.form.try_submit() {
            tracing::info!("Contact form validated, simulating submission");
            let tx = self.event_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(SUBMIT_DELAY).await;
                let _ = tx.send(AppEvent::SubmissionComplete).await;
            });
        } else {
            tracing::debug!(
                "Contact form rejected ({} field errors)",
                self.form.error_count()
            );
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Events & ticks
    // ─────────────────────────────────────────────────────────────────────

    /// Apply one event from the background channel
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmissionComplete => {
                // A completion with nothing in flight (stale event) is ignored
                if self.form.state() == SubmitState::Submitting {
                    self.form.complete_submission();
                    self.toast = Some(Toast::new("Message sent ✓"));
                    tracing::info!("Simulated submission complete");
                }
            }
            AppEvent::DemoScrollBy(delta) => self.scroll.scroll_by(delta),
            AppEvent::DemoJumpTo(id) => self.jump_to(id),
            AppEvent::DemoFinished => {
                self.demo_running = false;
                self.toast = Some(Toast::new("Demo tour finished"));
            }
        }
    }

    /// Periodic tick: animations, form timers, toast expiry
    pub fn on_tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.form.tick();
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Misc
    // ─────────────────────────────────────────────────────────────────────

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    /// Cycle to the previous theme
    pub fn prev_theme(&mut self) {
        self.theme_kind = self.theme_kind.prev();
        self.theme = self.theme_kind.theme();
    }

    /// Copy the contact email to the system clipboard
    pub fn copy_contact_email(&mut self) {
        let email = self.portfolio.contact.email.clone();
        match clipboard::copy_to_clipboard(&email) {
            Ok(()) => {
                self.toast = Some(Toast::new("Email copied to clipboard"));
                tracing::debug!("Copied contact email");
            }
            Err(e) => {
                self.toast = Some(Toast::new("Clipboard unavailable"));
                tracing::warn!("Clipboard copy failed: {:#}", e);
            }
        }
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }

    /// Handle a key press - returns true if the action should trigger
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let (tx, _rx) = mpsc::channel(8);
        App::new(
            &Config::default(),
            Portfolio::default(),
            LogBuffer::new(),
            tx,
        )
    }

    fn regions() -> Vec<(SectionId, PageRegion)> {
        // A small synthetic page: six sections of 20 lines, 2-line gaps
        SectionId::all()
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, PageRegion::new(i * 22, 20)))
            .collect()
    }

    #[test]
    fn every_section_gets_its_own_subscription() {
        let app = test_app();
        assert_eq!(app.trackers.len(), SectionId::all().len());
        assert_eq!(app.observer.subscription_count(), app.trackers.len());

        // All independent subscriptions, all initially hidden
        for &id in SectionId::all() {
            assert!(!app.is_section_visible(id));
        }
    }

    #[test]
    fn sweep_reveals_sections_in_the_viewport() {
        let mut app = test_app();
        let regions = regions();

        // Viewport over the top of the page: Home fully visible,
        // Contact far below
        app.sweep_visibility(PageRegion::new(0, 30), &regions);
        assert!(app.is_section_visible(SectionId::Home));
        assert!(app.is_section_visible(SectionId::About));
        assert!(!app.is_section_visible(SectionId::Contact));

        // Scroll to the bottom: Contact appears, Home disappears
        app.sweep_visibility(PageRegion::new(100, 30), &regions);
        assert!(app.is_section_visible(SectionId::Contact));
        assert!(!app.is_section_visible(SectionId::Home));
    }

    #[test]
    fn scroll_spy_follows_the_viewport() {
        let mut app = test_app();
        let regions = regions();

        app.sweep_visibility(PageRegion::new(0, 30), &regions);
        assert_eq!(app.active_section, SectionId::Home);

        app.scroll.update_dimensions(200, 30);
        app.scroll.scroll_to(44);
        app.sweep_visibility(PageRegion::new(44, 30), &regions);
        assert_eq!(app.active_section, SectionId::Education);
    }

    #[test]
    fn jump_uses_measured_regions() {
        let mut app = test_app();
        app.scroll.update_dimensions(200, 30);
        app.sweep_visibility(PageRegion::new(0, 30), &regions());

        app.jump_to(SectionId::Skills);
        assert_eq!(app.scroll.offset(), 66);
    }

    #[test]
    fn jump_before_first_layout_is_a_noop() {
        let mut app = test_app();
        app.jump_to(SectionId::Contact);
        assert_eq!(app.scroll.offset(), 0);
    }

    #[test]
    fn release_trackers_is_safe_to_repeat() {
        let mut app = test_app();
        app.release_trackers();
        assert_eq!(app.observer.subscription_count(), 0);
        // Second release must be a no-op, not a panic
        app.release_trackers();
    }

    #[test]
    fn stray_completion_event_is_harmless() {
        let mut app = test_app();
        app.apply_event(AppEvent::SubmissionComplete);
        assert_eq!(app.form.state(), SubmitState::Editing);
        assert!(app.toast.is_none());
    }

    #[test]
    fn theme_cycling_updates_palette() {
        let mut app = test_app();
        let initial = app.theme_kind;
        app.next_theme();
        assert_ne!(app.theme_kind, initial);
        app.prev_theme();
        assert_eq!(app.theme_kind, initial);
    }

    #[test]
    fn demo_finish_clears_the_flag() {
        let mut app = test_app();
        app.demo_running = true;
        app.apply_event(AppEvent::DemoFinished);
        assert!(!app.demo_running);
        assert!(app.toast.is_some());
    }
}
