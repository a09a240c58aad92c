// Visibility tracking - scroll-triggered section reveals
//
// This module is the mechanism behind every fade animation on the page.
// A ViewportObserver watches page regions against the scroll viewport and
// reports threshold crossings as discrete events; each section owns a
// FadeTracker that turns those events into a boolean visibility signal.
//
// The observer is abstracted behind the IntersectionSource trait so the
// trackers never touch the terminal directly. Tests drive them with a
// recording source, and headless mode runs with no source at all.

/// Handle for one active observation subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A vertical band of the page, in content-line coordinates
///
/// Only the vertical axis matters for a single-column page: sections span
/// the full width, so intersection is a 1-D overlap of line ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRegion {
    /// First content line of the region
    pub top: usize,
    /// Number of content lines the region spans
    pub height: usize,
}

impl PageRegion {
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// Fraction of this region that overlaps `other`, in [0, 1]
    ///
    /// Zero-height regions have no meaningful ratio and report 0.0;
    /// callers treat them as unattached targets.
    pub fn intersection_ratio(&self, other: &PageRegion) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        let top = self.top.max(other.top);
        let bottom = self.bottom().min(other.bottom());
        let overlap = bottom.saturating_sub(top);
        overlap as f64 / self.height as f64
    }
}

/// One intersection change report, delivered when a subscription's
/// visibility state crosses its threshold in either direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEvent {
    pub subscription: SubscriptionId,
    /// Fraction of the target currently inside the viewport
    pub ratio: f64,
    /// Whether the target now counts as visible at its threshold
    pub is_intersecting: bool,
}

/// Host-supplied visibility-detection primitive
///
/// Mirrors the observe/unobserve/disconnect contract of platform
/// intersection observers. The concrete implementation in this crate is
/// [`ViewportObserver`]; tests substitute their own.
pub trait IntersectionSource {
    /// Begin observing a new target at the given threshold
    fn observe(&mut self, threshold: f64) -> SubscriptionId;

    /// Stop observing one target
    fn unobserve(&mut self, subscription: SubscriptionId);

    /// Drop all subscriptions
    fn disconnect(&mut self);
}

// ─────────────────────────────────────────────────────────────────────────────
// Viewport observer
// ─────────────────────────────────────────────────────────────────────────────

/// Per-subscription observation state
#[derive(Debug, Clone)]
struct Subscription {
    id: SubscriptionId,
    /// Fraction of the target that must be inside the viewport, in [0, 1]
    threshold: f64,
    /// Last reported intersection state (starts out not intersecting)
    intersecting: bool,
}

impl Subscription {
    /// Whether `ratio` counts as intersecting at this threshold
    ///
    /// A zero threshold means "any overlap at all", matching how platform
    /// observers treat threshold 0 - a strict `ratio >= 0.0` would be
    /// vacuously true even for fully off-screen targets.
    fn is_intersecting(&self, ratio: f64) -> bool {
        if self.threshold > 0.0 {
            ratio >= self.threshold
        } else {
            ratio > 0.0
        }
    }
}

/// Watches page regions against the scroll viewport
///
/// The render loop calls [`ViewportObserver::sweep`] once per frame with the
/// current viewport band and the measured region of every observed target.
/// Events come back only for subscriptions whose intersection state changed,
/// so a motionless frame produces no traffic at all.
#[derive(Debug, Default)]
pub struct ViewportObserver {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate all subscriptions against the current viewport
    ///
    /// `targets` maps subscriptions to their measured page regions. A
    /// subscription with no entry in `targets` is an unattached element:
    /// it is skipped without error and keeps its previous state.
    pub fn sweep(
        &mut self,
        viewport: PageRegion,
        targets: &[(SubscriptionId, PageRegion)],
    ) -> Vec<IntersectionEvent> {
        let mut events = Vec::new();

        for sub in &mut self.subscriptions {
            let Some((_, region)) = targets.iter().find(|(id, _)| *id == sub.id) else {
                continue;
            };
            if region.height == 0 {
                continue;
            }

            let ratio = region.intersection_ratio(&viewport);
            let now_intersecting = sub.is_intersecting(ratio);

            if now_intersecting != sub.intersecting {
                sub.intersecting = now_intersecting;
                events.push(IntersectionEvent {
                    subscription: sub.id,
                    ratio,
                    is_intersecting: now_intersecting,
                });
            }
        }

        events
    }

    /// Number of live subscriptions
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl IntersectionSource for ViewportObserver {
    fn observe(&mut self, threshold: f64) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            threshold: threshold.clamp(0.0, 1.0),
            intersecting: false,
        });
        id
    }

    fn unobserve(&mut self, subscription: SubscriptionId) {
        self.subscriptions.retain(|s| s.id != subscription);
    }

    fn disconnect(&mut self) {
        self.subscriptions.clear();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fade tracker
// ─────────────────────────────────────────────────────────────────────────────

/// Presentation class derived from the visibility signal
///
/// Purely cosmetic: the rendering layer maps this to styles, the tracker
/// itself never mutates display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeClass {
    FadeIn,
    FadeOut,
}

/// Boolean visibility signal for one on-screen region
///
/// Each section owns one tracker; there is no coordination between them.
/// The tracker holds at most one live subscription: re-attaching releases
/// the previous subscription first, and teardown is idempotent.
///
/// State machine: Hidden -> Visible -> Hidden -> ... while attached;
/// released is terminal.
#[derive(Debug)]
pub struct FadeTracker {
    threshold: f64,
    visible: bool,
    /// Set when the host has no intersection primitive: the signal is
    /// permanently visible and no subscription is ever made
    always_visible: bool,
    subscription: Option<SubscriptionId>,
}

impl FadeTracker {
    /// Create a tracker, initially hidden
    ///
    /// `threshold` is the fraction of the region that must be inside the
    /// viewport to count as visible, clamped to [0, 1].
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
            always_visible: false,
            subscription: None,
        }
    }

    /// Fallback for hosts without a visibility primitive: the signal is
    /// `true` from the start and [`FadeTracker::attach`] does nothing
    pub fn always_visible() -> Self {
        Self {
            threshold: 0.0,
            visible: true,
            always_visible: true,
            subscription: None,
        }
    }

    /// Subscribe to an intersection source
    ///
    /// If already attached, the prior subscription is released first so the
    /// tracker never leaks observers.
    pub fn attach(&mut self, source: &mut dyn IntersectionSource) {
        if self.always_visible {
            return;
        }
        if let Some(prior) = self.subscription.take() {
            source.unobserve(prior);
        }
        self.subscription = Some(source.observe(self.threshold));
    }

    /// Update the signal from an observation event
    ///
    /// Events for other subscriptions are ignored. The signal reflects
    /// exactly the most recent matching event - no debouncing, no
    /// hysteresis.
    pub fn apply(&mut self, event: &IntersectionEvent) {
        if self.subscription == Some(event.subscription) {
            self.visible = event.is_intersecting;
        }
    }

    /// Release the subscription
    ///
    /// Safe to call any number of times; only the first call reaches the
    /// source.
    pub fn release(&mut self, source: &mut dyn IntersectionSource) {
        if let Some(id) = self.subscription.take() {
            source.unobserve(id);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    /// Derive the presentation class from the current signal
    pub fn fade_class(&self) -> FadeClass {
        if self.visible {
            FadeClass::FadeIn
        } else {
            FadeClass::FadeOut
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double that records observe/unobserve traffic
    #[derive(Default)]
    struct RecordingSource {
        next_id: u64,
        observed: Vec<f64>,
        unobserved: Vec<SubscriptionId>,
    }

    impl IntersectionSource for RecordingSource {
        fn observe(&mut self, threshold: f64) -> SubscriptionId {
            let id = SubscriptionId(self.next_id);
            self.next_id += 1;
            self.observed.push(threshold);
            id
        }

        fn unobserve(&mut self, subscription: SubscriptionId) {
            self.unobserved.push(subscription);
        }

        fn disconnect(&mut self) {}
    }

    fn sweep_one(
        observer: &mut ViewportObserver,
        sub: SubscriptionId,
        viewport: PageRegion,
        target: PageRegion,
    ) -> Vec<IntersectionEvent> {
        observer.sweep(viewport, &[(sub, target)])
    }

    #[test]
    fn tracker_starts_hidden() {
        let tracker = FadeTracker::new(0.2);
        assert!(!tracker.is_visible());
        assert_eq!(tracker.fade_class(), FadeClass::FadeOut);
    }

    #[test]
    fn tracker_observes_with_its_threshold() {
        let mut source = RecordingSource::default();
        let mut tracker = FadeTracker::new(0.5);
        tracker.attach(&mut source);

        assert_eq!(source.observed, vec![0.5]);
        assert!(tracker.subscription().is_some());
    }

    #[test]
    fn never_intersecting_stays_hidden() {
        let mut observer = ViewportObserver::new();
        let mut tracker = FadeTracker::new(0.2);
        tracker.attach(&mut observer);
        let sub = tracker.subscription().unwrap();

        let viewport = PageRegion::new(0, 20);
        let far_below = PageRegion::new(500, 10);

        for _ in 0..50 {
            for event in sweep_one(&mut observer, sub, viewport, far_below) {
                tracker.apply(&event);
            }
            assert!(!tracker.is_visible());
        }
    }

    #[test]
    fn ratio_crossing_toggles_signal() {
        // Threshold 0.3: ratio 0.5 turns the signal on, ratio 0.1 turns it off
        let mut observer = ViewportObserver::new();
        let mut tracker = FadeTracker::new(0.3);
        tracker.attach(&mut observer);
        let sub = tracker.subscription().unwrap();

        let target = PageRegion::new(0, 10);

        // Viewport covers 5 of 10 lines: ratio 0.5
        for event in sweep_one(&mut observer, sub, PageRegion::new(0, 5), target) {
            tracker.apply(&event);
        }
        assert!(tracker.is_visible());

        // Viewport covers 1 of 10 lines: ratio 0.1
        for event in sweep_one(&mut observer, sub, PageRegion::new(0, 1), target) {
            tracker.apply(&event);
        }
        assert!(!tracker.is_visible());
    }

    #[test]
    fn events_fire_only_on_crossings() {
        let mut observer = ViewportObserver::new();
        let sub = observer.observe(0.2);

        let viewport = PageRegion::new(0, 20);
        let target = PageRegion::new(5, 10);

        // First sweep crosses the threshold
        let events = sweep_one(&mut observer, sub, viewport, target);
        assert_eq!(events.len(), 1);
        assert!(events[0].is_intersecting);

        // Same geometry again: no crossing, no event
        let events = sweep_one(&mut observer, sub, viewport, target);
        assert!(events.is_empty());
    }

    #[test]
    fn unattached_target_is_a_noop() {
        let mut observer = ViewportObserver::new();
        let _sub = observer.observe(0.2);

        // Sweep with no target rect for the subscription
        let events = observer.sweep(PageRegion::new(0, 20), &[]);
        assert!(events.is_empty());
    }

    #[test]
    fn zero_height_target_is_skipped() {
        let mut observer = ViewportObserver::new();
        let sub = observer.observe(0.2);

        let events = sweep_one(
            &mut observer,
            sub,
            PageRegion::new(0, 20),
            PageRegion::new(5, 0),
        );
        assert!(events.is_empty());
    }

    #[test]
    fn zero_threshold_requires_actual_overlap() {
        let mut observer = ViewportObserver::new();
        let sub = observer.observe(0.0);

        // Entirely below the viewport: ratio 0, must not intersect
        let events = sweep_one(
            &mut observer,
            sub,
            PageRegion::new(0, 10),
            PageRegion::new(50, 10),
        );
        assert!(events.is_empty());

        // One line of overlap is enough at threshold 0
        let events = sweep_one(
            &mut observer,
            sub,
            PageRegion::new(0, 10),
            PageRegion::new(9, 10),
        );
        assert_eq!(events.len(), 1);
        assert!(events[0].is_intersecting);
    }

    #[test]
    fn release_is_idempotent() {
        let mut source = RecordingSource::default();
        let mut tracker = FadeTracker::new(0.2);
        tracker.attach(&mut source);

        tracker.release(&mut source);
        tracker.release(&mut source);

        assert_eq!(source.unobserved.len(), 1);
        assert!(tracker.subscription().is_none());
    }

    #[test]
    fn reattach_releases_prior_subscription() {
        let mut source = RecordingSource::default();
        let mut tracker = FadeTracker::new(0.2);

        tracker.attach(&mut source);
        let first = tracker.subscription().unwrap();
        tracker.attach(&mut source);

        assert_eq!(source.unobserved, vec![first]);
        assert_eq!(source.observed.len(), 2);
        // Exactly one subscription remains live
        assert!(tracker.subscription().is_some());
        assert_ne!(tracker.subscription(), Some(first));
    }

    #[test]
    fn released_tracker_ignores_stale_events() {
        let mut observer = ViewportObserver::new();
        let mut tracker = FadeTracker::new(0.2);
        tracker.attach(&mut observer);
        let sub = tracker.subscription().unwrap();
        tracker.release(&mut observer);

        // A stale event for the old subscription must not flip the signal
        tracker.apply(&IntersectionEvent {
            subscription: sub,
            ratio: 1.0,
            is_intersecting: true,
        });
        assert!(!tracker.is_visible());
    }

    #[test]
    fn fallback_is_visible_without_subscribing() {
        let mut source = RecordingSource::default();
        let mut tracker = FadeTracker::always_visible();

        assert!(tracker.is_visible());
        tracker.attach(&mut source);

        assert!(source.observed.is_empty());
        assert!(tracker.subscription().is_none());
        assert!(tracker.is_visible());
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(FadeTracker::new(3.0).threshold(), 1.0);
        assert_eq!(FadeTracker::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn observer_unobserve_drops_subscription() {
        let mut observer = ViewportObserver::new();
        let a = observer.observe(0.2);
        let b = observer.observe(0.4);
        assert_eq!(observer.subscription_count(), 2);

        observer.unobserve(a);
        assert_eq!(observer.subscription_count(), 1);

        // Dropped subscriptions never report again
        let events = observer.sweep(
            PageRegion::new(0, 20),
            &[(a, PageRegion::new(0, 10)), (b, PageRegion::new(0, 10))],
        );
        assert!(events.iter().all(|e| e.subscription == b));
    }

    #[test]
    fn observer_disconnect_clears_everything() {
        let mut observer = ViewportObserver::new();
        observer.observe(0.2);
        observer.observe(0.4);
        observer.disconnect();
        assert_eq!(observer.subscription_count(), 0);
    }

    #[test]
    fn intersection_ratio_math() {
        let target = PageRegion::new(10, 10);
        assert_eq!(target.intersection_ratio(&PageRegion::new(0, 30)), 1.0);
        assert_eq!(target.intersection_ratio(&PageRegion::new(0, 15)), 0.5);
        assert_eq!(target.intersection_ratio(&PageRegion::new(0, 10)), 0.0);
        assert_eq!(target.intersection_ratio(&PageRegion::new(15, 100)), 0.5);
    }
}
