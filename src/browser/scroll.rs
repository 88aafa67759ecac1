//! Near-bottom detection
//!
//! Whatever renders the results reports how far its viewport is from the
//! end of the content; the monitor turns that into a `NearBottom` action.

use super::{Action, BrowseSession, FetchRequest};

/// Default distance (in terminal rows) that counts as "near the bottom"
pub const DEFAULT_SCROLL_THRESHOLD: usize = 12;

/// Something with a scrollable viewport over the result list
pub trait ViewportProximity {
    /// Rows between the bottom edge of the viewport and the end of content
    fn distance_to_bottom(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMonitor {
    threshold: usize,
}

impl Default for ScrollMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollMonitor {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn is_near_bottom(&self, viewport: &dyn ViewportProximity) -> bool {
        viewport.distance_to_bottom() <= self.threshold
    }

    /// Called on every scroll. Fires `NearBottom` when close enough and
    /// nothing is in flight; the session decides if a page is actually due.
    pub fn observe(
        &self,
        viewport: &dyn ViewportProximity,
        session: &mut BrowseSession,
    ) -> Option<FetchRequest> {
        if session.is_loading() || !self.is_near_bottom(viewport) {
            return None;
        }
        session.dispatch(Action::NearBottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl ViewportProximity for Fixed {
        fn distance_to_bottom(&self) -> usize {
            self.0
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let monitor = ScrollMonitor::new(12);
        assert!(monitor.is_near_bottom(&Fixed(0)));
        assert!(monitor.is_near_bottom(&Fixed(12)));
        assert!(!monitor.is_near_bottom(&Fixed(13)));
    }

    #[test]
    fn default_threshold() {
        assert_eq!(ScrollMonitor::default().threshold(), DEFAULT_SCROLL_THRESHOLD);
    }
}
