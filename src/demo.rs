// Demo mode: a scripted scroll tour through the page
//
// Drives the same event channel the rest of the app uses: glide down a few
// lines, jump to the next section, linger, repeat, then return home. Runs
// with FOLIO_DEMO=1; stops as soon as the TUI goes away (sends fail once
// the receiver drops).

use crate::events::AppEvent;
use crate::tui::sections::SectionId;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Delay before the tour starts, so the first frame has rendered
const START_DELAY: Duration = Duration::from_millis(1500);

/// Pause on each section
const SECTION_LINGER: Duration = Duration::from_millis(1800);

/// Pause between glide steps
const GLIDE_STEP: Duration = Duration::from_millis(120);

/// Run the scripted tour to completion (or until the TUI quits)
pub async fn run_demo(tx: mpsc::Sender<AppEvent>) {
    sleep(START_DELAY).await;
    tracing::debug!("Demo tour starting");

    for &section in SectionId::all().iter().skip(1) {
        // Glide a little so the fade crossings are visible...
        for _ in 0..6 {
            if tx.send(AppEvent::DemoScrollBy(2)).await.is_err() {
                return;
            }
            sleep(GLIDE_STEP).await;
        }
        // ...then snap the section to the top of the viewport
        if tx.send(AppEvent::DemoJumpTo(section)).await.is_err() {
            return;
        }
        sleep(SECTION_LINGER).await;
    }

    if tx.send(AppEvent::DemoJumpTo(SectionId::Home)).await.is_err() {
        return;
    }
    let _ = tx.send(AppEvent::DemoFinished).await;
    tracing::debug!("Demo tour finished");
}
