//! Live session clock with periodic refresh.

use std::time::{Duration, Instant};

/// Fixed-interval refresh schedule. Not coordinated with user actions.
#[derive(Debug, Clone)]
pub struct RefreshSchedule {
    interval: Duration,
    last: Option<Instant>,
}

impl RefreshSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Due on the first call, then once every `interval`.
    pub fn due(&self, now: Instant) -> bool {
        match self.last {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.last = Some(now);
    }
}
