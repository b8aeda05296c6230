use std::time::Duration;

/// Reference redraw cadence, roughly one tick per display frame.
pub const REDRAW_INTERVAL: Duration = Duration::from_millis(16);

/// Fixed-cadence tick source for the render loop.
///
/// Accumulates wall-clock time and reports at most one due tick per
/// interval. Backlog beyond one interval is dropped rather than replayed:
/// redraws are idempotent recomputation from current state, so catching up
/// on missed ticks would only repeat identical work.
pub struct FramePacer {
    interval: Duration,
    accumulated: Duration,
}

impl FramePacer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Feeds elapsed wall-clock time; returns true when a tick is due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(elapsed);

        if self.accumulated < self.interval {
            return false;
        }

        self.accumulated = Duration::ZERO;
        true
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(REDRAW_INTERVAL)
    }
}
