//! Asset-load progress gate
//!
//! The host's loader reports progress as it fetches meshes, clips, and
//! textures; the tracker normalizes those reports and fires a single
//! readiness event once everything is in. Load *failures* are not reported
//! distinctly: a missing clip simply never animates, matching the renderer's
//! behavior.

use serde::Serialize;

/// Fired once when all assets are loaded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LoadEvent {
    Ready,
}

/// Mirrors the external loader's progress
#[derive(Clone, Debug, Default)]
pub struct AssetTracker {
    progress: f32,
    active: bool,
    ready_fired: bool,
}

impl AssetTracker {
    /// Create a tracker with nothing loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a loader report
    ///
    /// Progress is clamped to [0, 100] and never decreases, so stale or
    /// out-of-order reports cannot walk the bar backwards.
    pub fn report(&mut self, progress: f32, active: bool) {
        self.progress = self.progress.max(progress.clamp(0.0, 100.0));
        self.active = active;
    }

    /// Fire [`LoadEvent::Ready`] once everything is loaded
    pub fn poll(&mut self) -> Option<LoadEvent> {
        if !self.ready_fired && self.is_ready() {
            self.ready_fired = true;
            return Some(LoadEvent::Ready);
        }
        None
    }

    /// Whether loading has finished
    pub fn is_ready(&self) -> bool {
        !self.active && self.progress >= 100.0
    }

    /// Current progress percentage in [0, 100]
    pub fn progress(&self) -> f32 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unready() {
        let mut tracker = AssetTracker::new();
        assert!(!tracker.is_ready());
        assert_eq!(tracker.poll(), None);
    }

    #[test]
    fn test_ready_requires_full_and_inactive() {
        let mut tracker = AssetTracker::new();

        tracker.report(100.0, true);
        assert!(!tracker.is_ready());

        tracker.report(100.0, false);
        assert!(tracker.is_ready());
    }

    #[test]
    fn test_ready_fires_once() {
        let mut tracker = AssetTracker::new();
        tracker.report(100.0, false);

        assert_eq!(tracker.poll(), Some(LoadEvent::Ready));
        assert_eq!(tracker.poll(), None);
    }

    #[test]
    fn test_progress_monotonic_and_clamped() {
        let mut tracker = AssetTracker::new();

        tracker.report(60.0, true);
        tracker.report(40.0, true);
        assert_eq!(tracker.progress(), 60.0);

        tracker.report(250.0, true);
        assert_eq!(tracker.progress(), 100.0);

        tracker.report(-5.0, true);
        assert_eq!(tracker.progress(), 100.0);
    }
}
