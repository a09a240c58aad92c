// Events that flow from background tasks to the TUI loop
//
// The render loop multiplexes keyboard input, a redraw tick, and this
// channel. Background work (the simulated form submission, the demo tour)
// never touches app state directly; it sends an event and the loop applies
// it on the UI thread.

use crate::tui::sections::SectionId;

/// Application event delivered over the mpsc channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The simulated contact-form round trip finished
    SubmissionComplete,

    /// Demo tour: scroll the page by this many lines (negative scrolls up)
    DemoScrollBy(i32),

    /// Demo tour: jump straight to a section
    DemoJumpTo(SectionId),

    /// Demo tour ran to completion
    DemoFinished,
}
