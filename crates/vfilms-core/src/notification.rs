//! Transient notifications (the toast in the corner of the page)
//!
//! A slot holds at most one notification. Raising a new one replaces the old one and
//! restarts its lifetime; a notification past its expiry is treated as absent even if
//! nobody has pruned it yet.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    pub raised_at_ms: u64,
    /// `None` keeps the notification until it is replaced or dismissed.
    pub expires_at_ms: Option<u64>,
}

impl Notification {
    pub fn is_live(&self, now_ms: u64) -> bool {
        match self.expires_at_ms {
            Some(expires_at) => now_ms < expires_at,
            None => true,
        }
    }

    /// Heading shown next to the text
    pub fn title(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "Success",
            NotificationKind::Error => "Error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationSlot {
    ttl_ms: u64,
    current: Option<Notification>,
}

impl NotificationSlot {
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            ttl_ms,
            current: None,
        }
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    pub fn raise(&mut self, kind: NotificationKind, text: impl Into<String>, now_ms: u64) {
        self.current = Some(Notification {
            kind,
            text: text.into(),
            raised_at_ms: now_ms,
            expires_at_ms: Some(now_ms.saturating_add(self.ttl_ms)),
        });
    }

    pub fn raise_sticky(&mut self, kind: NotificationKind, text: impl Into<String>, now_ms: u64) {
        self.current = Some(Notification {
            kind,
            text: text.into(),
            raised_at_ms: now_ms,
            expires_at_ms: None,
        });
    }

    pub fn current(&self, now_ms: u64) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.is_live(now_ms))
    }

    /// Drops an expired notification. Returns true if one was removed.
    pub fn prune(&mut self, now_ms: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| !n.is_live(now_ms)) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let mut slot = NotificationSlot::new(3500);
        slot.raise(NotificationKind::Success, "Form Submitted", 1_000);

        assert!(slot.current(1_000).is_some());
        assert!(slot.current(4_499).is_some());
        assert!(slot.current(4_500).is_none());
        assert!(slot.current(10_000).is_none());
    }

    #[test]
    fn raising_again_restarts_lifetime() {
        let mut slot = NotificationSlot::new(3500);
        slot.raise(NotificationKind::Error, "first", 0);
        slot.raise(NotificationKind::Success, "second", 3_000);

        let live = slot.current(4_000).unwrap();
        assert_eq!(live.text, "second");
        assert_eq!(live.title(), "Success");
        assert!(slot.current(6_500).is_none());
    }

    #[test]
    fn sticky_notifications_stay_until_dismissed() {
        let mut slot = NotificationSlot::new(3500);
        slot.raise_sticky(NotificationKind::Error, "stuck", 0);
        assert!(slot.current(u64::MAX).is_some());
        assert!(!slot.prune(1_000_000));

        slot.dismiss();
        assert!(slot.current(0).is_none());
    }

    #[test]
    fn prune_removes_only_expired() {
        let mut slot = NotificationSlot::new(100);
        slot.raise(NotificationKind::Error, "oops", 0);
        assert!(!slot.prune(50));
        assert!(slot.prune(100));
        assert!(slot.current(0).is_none());
    }
}
