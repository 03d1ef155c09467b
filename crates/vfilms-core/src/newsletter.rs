//! Footer newsletter box
//!
//! Format check only; nothing leaves the page. A rejected address stays in the input with
//! a warning that lingers until the next attempt, an accepted one clears the input and the
//! thank-you line fades after its lifetime.

use crate::clock::{Clock, SystemClock};
use crate::contact::is_valid_email;
use crate::notification::{Notification, NotificationKind, NotificationSlot};

pub const INVALID_EMAIL: &str = "Please enter a valid email.";
pub const SUBSCRIBED: &str = "Thanks — you'll hear from us soon!";

pub struct NewsletterSignup<C: Clock = SystemClock> {
    clock: C,
    email: String,
    message: NotificationSlot,
}

impl<C: Clock> NewsletterSignup<C> {
    pub fn new(clock: C, message_ttl_ms: u64) -> Self {
        Self {
            clock,
            email: String::new(),
            message: NotificationSlot::new(message_ttl_ms),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn edit(&mut self, raw: &str) {
        self.email = raw.to_string();
    }

    /// Checks the current input. Returns whether the address was accepted.
    pub fn subscribe(&mut self) -> bool {
        let now = self.clock.now_ms();
        let candidate = self.email.trim();

        if !is_valid_email(candidate) {
            log::debug!("newsletter address rejected");
            self.message.raise_sticky(NotificationKind::Error, INVALID_EMAIL, now);
            return false;
        }

        log::info!("newsletter signup accepted");
        self.message.raise(NotificationKind::Success, SUBSCRIBED, now);
        self.email.clear();
        true
    }

    pub fn message(&self) -> Option<&Notification> {
        self.message.current(self.clock.now_ms())
    }
}
