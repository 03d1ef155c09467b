use super::fields::ContactFields;
use super::validation::FieldErrors;
use crate::notification::NotificationSlot;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// Only held while a submit attempt is being checked
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Everything the view needs to paint the form
#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: ContactFields,
    pub field_errors: FieldErrors,
    pub status: SubmissionStatus,
    /// Inline status line under the inputs; empty when there is nothing to say
    pub last_message: String,
    pub notification: NotificationSlot,
}

impl FormState {
    pub fn new(notification_ttl_ms: u64) -> Self {
        Self {
            fields: ContactFields::default(),
            field_errors: FieldErrors::default(),
            status: SubmissionStatus::Idle,
            last_message: String::new(),
            notification: NotificationSlot::new(notification_ttl_ms),
        }
    }

    /// True while the submit control should show "Sending..."
    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }
}
