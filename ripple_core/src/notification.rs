//! Transient notifications
//!
//! At most one notification is visible at a time. Each one gets a fresh
//! [`NotificationTicket`] and a deadline; a dismissal carrying an older
//! ticket is ignored, so a late timer can never hide a newer message.
//! Expiry is driven by [`NotificationTimer::tick`], which the front-end
//! calls only while a notification is showing.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Identifies one shown notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationTicket(u64);

/// A visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub ticket: NotificationTicket,
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Owns the current notification and its auto-dismiss deadline
#[derive(Debug, Clone)]
pub struct NotificationTimer {
    duration: Duration,
    next_ticket: u64,
    current: Option<Notification>,
}

impl NotificationTimer {
    pub fn new(duration: Duration) -> Self {
        NotificationTimer {
            duration,
            next_ticket: 1,
            current: None,
        }
    }

    /// Show a notification, replacing any visible one
    pub fn show(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        now: Instant,
    ) -> NotificationTicket {
        let ticket = NotificationTicket(self.next_ticket);
        self.next_ticket += 1;
        self.current = Some(Notification {
            ticket,
            kind,
            message: message.into(),
            expires_at: now + self.duration,
        });
        ticket
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Hide the notification if `ticket` is the one showing.
    ///
    /// Returns whether anything was hidden.
    pub fn dismiss(&mut self, ticket: NotificationTicket) -> bool {
        if self.current.as_ref().is_some_and(|n| n.ticket == ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Hide the notification if its deadline has passed.
    ///
    /// Returns whether anything was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(3000);

    #[test]
    fn test_expires_after_delay() {
        let start = Instant::now();
        let mut timer = NotificationTimer::new(DELAY);
        timer.show(NotificationKind::Success, "Saved", start);

        assert!(!timer.tick(start + Duration::from_millis(2999)));
        assert!(timer.current().is_some());
        assert!(timer.tick(start + DELAY));
        assert!(timer.current().is_none());
    }

    #[test]
    fn test_stale_ticket_does_not_dismiss_newer_notification() {
        let start = Instant::now();
        let mut timer = NotificationTimer::new(DELAY);
        let first = timer.show(NotificationKind::Success, "first", start);
        let second = timer.show(NotificationKind::Error, "second", start);

        assert_ne!(first, second);
        assert!(!timer.dismiss(first));
        assert_eq!(timer.current().map(|n| n.message.as_str()), Some("second"));
        assert!(timer.dismiss(second));
    }

    #[test]
    fn test_replacement_restarts_deadline() {
        let start = Instant::now();
        let mut timer = NotificationTimer::new(DELAY);
        timer.show(NotificationKind::Success, "first", start);
        let later = start + Duration::from_millis(2000);
        timer.show(NotificationKind::Success, "second", later);

        assert!(!timer.tick(start + DELAY));
        assert!(timer.tick(later + DELAY));
    }
}
