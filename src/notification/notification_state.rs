use std::time::{Duration, Instant};

pub const DEFAULT_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

/// At most one notification is visible; a new one replaces the old
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.show_at(message, kind, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        let message = message.into();
        log::debug!("Notification ({:?}): {}", kind, message);
        self.current = Some(Notification {
            message,
            kind,
            shown_at: now,
            duration: duration_for(kind),
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Drop the notification once its time is up
    pub fn expire(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

fn duration_for(kind: NotificationKind) -> Duration {
    match kind {
        NotificationKind::Info => Duration::from_millis(DEFAULT_DURATION_MS),
        // Errors linger a little longer
        NotificationKind::Warning | NotificationKind::Error => {
            Duration::from_millis(DEFAULT_DURATION_MS * 2)
        }
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
