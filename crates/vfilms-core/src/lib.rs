//! Interactive core of the V Films studio site.
//!
//! The site itself is static markup; the pieces with real behavior live here and are
//! driven by a host (the terminal CLI, a web front end, a test) that feeds trigger events
//! in and reads published state back out:
//!
//! - **Stats counters**: [`CounterAnimator`] eases a set of named figures from zero to their
//!   targets once the stats section becomes visible, paced by a [`FrameLoop`].
//! - **Contact form**: [`ContactFormSubmitter`] sanitizes and validates the four fields,
//!   performs a single POST through a [`ContactTransport`] and maps the outcome to a status
//!   line plus a transient [`Notification`].
//! - **Newsletter**: [`NewsletterSignup`] runs the footer's email format check.
//! - **Service catalog**: the copy behind the `/services/:slug` detail pages.
//! - **Configuration**: YAML-backed [`SiteConfig`] with defaults matching the live site.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod contact;
pub mod counter;
pub mod errors;
pub mod newsletter;
pub mod notification;

pub use catalog::{ServiceCatalog, ServiceEntry};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::*;
pub use contact::{
    ContactField, ContactFormSubmitter, ContactPayload, ContactTransport, FieldErrors, FormState,
    HttpContactTransport, SubmissionStatus, TransportResponse,
};
pub use counter::{
    CounterAnimator, CounterFrame, CounterPhase, CounterReading, CounterSpec, FrameLoop,
};
pub use errors::{SiteError, SubmitError, TransportError};
pub use newsletter::NewsletterSignup;
pub use notification::{Notification, NotificationKind, NotificationSlot};

#[cfg(test)]
pub mod test_utils;
