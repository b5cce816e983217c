use std::time::{Duration, Instant};

/// Fixed-interval timer for silent saves.
///
/// The caller feeds it clock readings from the same event loop that handles user actions, so
/// an autosave never overlaps an explicit save.
#[derive(Clone, Copy, Debug)]
pub struct AutoSave {
    interval: Duration,
    last: Instant,
}

impl AutoSave {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a full interval has elapsed since the last save.
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last) >= self.interval
    }

    /// Restart the interval at `now`; called after any save, explicit or not.
    pub fn mark(&mut self, now: Instant) {
        self.last = now;
    }

    /// Time left until the next save is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last))
    }
}
