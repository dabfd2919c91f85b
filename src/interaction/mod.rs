use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::core::Viewport;

/// Why the dashboard is re-rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderTrigger {
    /// A profile fetch resolved with fresh data.
    ProfileFetched,
    /// Resize events went quiet at this viewport.
    ViewportSettled(Viewport),
}

/// Deterministic trailing-edge debounce for viewport resize events.
///
/// Time is passed in by the host, so stepping is reproducible in tests.
/// Every `notify_resize` restarts the quiet period; `poll` yields the most
/// recent viewport once, after the quiet period has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeDebouncer {
    quiet_period: Duration,
    pending: Option<(Instant, Viewport)>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn notify_resize(&mut self, now: Instant, viewport: Viewport) {
        self.pending = Some((now, viewport));
    }

    /// Returns the settled viewport once `now` is at least one quiet period
    /// past the last resize, and forgets it.
    pub fn poll(&mut self, now: Instant) -> Option<Viewport> {
        let (last_event, viewport) = self.pending?;
        if now.saturating_duration_since(last_event) < self.quiet_period {
            return None;
        }
        self.pending = None;
        Some(viewport)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Earliest instant at which `poll` can fire.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .and_then(|(last_event, _)| last_event.checked_add(self.quiet_period))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
