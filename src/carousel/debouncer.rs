use std::time::{Duration, Instant};

/// Trailing-edge debounce of list position changes
///
/// Holds at most one countdown. Restarting replaces the pending index and
/// pushes the deadline out, so only the last position before a quiet period
/// is ever reported.
#[derive(Debug, Clone)]
pub struct SettleDebouncer {
    delay: Duration,
    pending: Option<PendingSettle>,
}

#[derive(Debug, Clone, Copy)]
struct PendingSettle {
    index: usize,
    deadline: Instant,
}

impl SettleDebouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start the countdown for `index`, cancelling any countdown in progress.
    /// Returns true when a pending countdown was replaced.
    pub fn restart(&mut self, index: usize, now: Instant) -> bool {
        let replaced = self.pending.is_some();
        self.pending = Some(PendingSettle {
            index,
            deadline: now + self.delay,
        });
        replaced
    }

    /// Drop the pending countdown, if any. Returns true when one was dropped.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Index whose countdown elapsed at or before `now`. Fires at most once
    /// per countdown.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                Some(pending.index)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
