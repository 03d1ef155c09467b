//! Contact form state machine
//!
//! ```text
//! Idle ──submit, invalid──▶ Invalid ──edit──▶ Idle
//! Idle ──submit, valid────▶ Submitting ──200/201──▶ Succeeded ──edit/reset──▶ Idle
//!                                      └─other────▶ Failed    ──edit────────▶ Idle
//! ```
//!
//! A submit attempt always lands in a defined state. The `Result` returned by the submit
//! methods only reports which branch was taken; the view reads [`FormState`] for display.

use super::fields::{sanitize, ContactField, ContactPayload};
use super::state::{FormState, SubmissionStatus};
use super::transport::{ContactTransport, HttpContactTransport, TransportResponse};
use super::validation::validate;
use crate::clock::{Clock, SystemClock};
use crate::config::ContactConfig;
use crate::errors::{SiteError, SubmitError, TransportError};
use crate::notification::{Notification, NotificationKind};
use std::time::Duration;

pub const FIX_ERRORS_STATUS: &str = "Please fix the errors above.";
pub const FIX_ERRORS_NOTICE: &str = "Please fix the form errors";
pub const SUBMITTED: &str = "Form Submitted";

pub struct ContactFormSubmitter<T: ContactTransport, C: Clock = SystemClock> {
    transport: T,
    clock: C,
    state: FormState,
}

impl ContactFormSubmitter<HttpContactTransport, SystemClock> {
    /// Submitter posting to the configured endpoint with the configured timeout
    pub fn from_config(config: &ContactConfig) -> Result<Self, SiteError> {
        let transport = HttpContactTransport::new(
            config.endpoint.clone(),
            Duration::from_millis(config.timeout_ms),
        )?;
        Ok(Self::new(transport, SystemClock::new(), config.notification_ttl_ms))
    }
}

impl<T: ContactTransport, C: Clock> ContactFormSubmitter<T, C> {
    pub fn new(transport: T, clock: C, notification_ttl_ms: u64) -> Self {
        Self {
            transport,
            clock,
            state: FormState::new(notification_ttl_ms),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Applies one keystroke's worth of input. Disallowed characters are stripped and the
    /// field's error is cleared; a settled form (invalid, failed, succeeded) becomes idle.
    pub fn edit(&mut self, field: ContactField, raw: &str) {
        let value = sanitize(field, raw);
        self.state.fields.set(field, value);
        self.state.field_errors.clear_field(field);

        match self.state.status {
            SubmissionStatus::Invalid | SubmissionStatus::Failed | SubmissionStatus::Succeeded => {
                log::debug!("{} edited, form back to idle", field);
                self.state.status = SubmissionStatus::Idle;
            }
            _ => {}
        }
    }

    /// Clears the form back to its freshly mounted state, keeping any live notification.
    /// Refused while a submit is in flight so that attempt still settles.
    pub fn reset(&mut self) -> Result<(), SubmitError> {
        if self.state.status == SubmissionStatus::Submitting {
            log::warn!("reset ignored: a submission is already in flight");
            return Err(SubmitError::InFlight);
        }
        self.state.fields.clear();
        self.state.field_errors.clear();
        self.state.last_message.clear();
        self.state.status = SubmissionStatus::Idle;
        Ok(())
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.state.notification.current(self.clock.now_ms())
    }

    pub fn dismiss_notification(&mut self) {
        self.state.notification.dismiss();
    }

    /// First half of a submit: validate and move to `Submitting`, returning the trimmed
    /// payload to send. Rejected without touching state while another submit is in flight.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, SubmitError> {
        if self.state.status == SubmissionStatus::Submitting {
            log::warn!("submit ignored: a submission is already in flight");
            return Err(SubmitError::InFlight);
        }

        self.state.last_message.clear();
        self.state.status = SubmissionStatus::Validating;

        let errors = validate(&self.state.fields);
        if !errors.is_empty() {
            log::debug!("contact form has {} invalid field(s)", errors.len());
            self.state.field_errors = errors.clone();
            self.state.status = SubmissionStatus::Invalid;
            self.state.last_message = FIX_ERRORS_STATUS.to_string();
            self.notify(NotificationKind::Error, FIX_ERRORS_NOTICE);
            return Err(SubmitError::Invalid(errors));
        }

        self.state.field_errors.clear();
        self.state.status = SubmissionStatus::Submitting;
        Ok(self.state.fields.to_payload())
    }

    /// Second half of a submit: map the transport outcome onto the form
    pub fn complete_submit(
        &mut self,
        outcome: Result<TransportResponse, TransportError>,
    ) -> Result<(), SubmitError> {
        if self.state.status != SubmissionStatus::Submitting {
            log::warn!("submit completion ignored in state {}", self.state.status);
            return Ok(());
        }

        match outcome {
            Ok(response) if response.is_accepted() => {
                log::info!("contact form submitted (HTTP {})", response.status);
                self.state.fields.clear();
                self.state.field_errors.clear();
                self.state.status = SubmissionStatus::Succeeded;
                self.state.last_message = SUBMITTED.to_string();
                self.notify(NotificationKind::Success, SUBMITTED);
                Ok(())
            }
            Ok(response) => {
                let server_message = response.server_message();
                let reason = server_message
                    .clone()
                    .unwrap_or_else(|| format!("Server returned {}", response.status));
                log::warn!("contact form rejected (HTTP {}): {}", response.status, reason);
                self.fail(&reason);
                Err(SubmitError::Server {
                    status: response.status,
                    message: server_message,
                })
            }
            Err(err) => {
                log::error!("contact form submit error: {}", err);
                self.fail(&err.to_string());
                Err(SubmitError::Transport(err))
            }
        }
    }

    /// Validates, sends exactly one request when valid, and settles the form
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let payload = self.begin_submit()?;
        let outcome = self.transport.send(&payload).await;
        self.complete_submit(outcome)
    }

    fn fail(&mut self, reason: &str) {
        self.state.status = SubmissionStatus::Failed;
        self.state.last_message = format!("Failed to send: {}", reason);
        self.notify(NotificationKind::Error, format!("Failed: {}", reason));
    }

    fn notify(&mut self, kind: NotificationKind, text: impl Into<String>) {
        let now = self.clock.now_ms();
        self.state.notification.raise(kind, text, now);
    }
}
