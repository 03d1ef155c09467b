use super::fields::{ContactField, ContactFields};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email";
pub const PHONE_REQUIRED: &str = "Phone is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// `local@domain.tld`: one `@`, a dot somewhere after it, no whitespace anywhere
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL.is_match(candidate)
}

/// Per-field error messages. A missing key means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<ContactField, String>);

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: ContactField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if fields.name.trim().is_empty() {
        errors.insert(ContactField::Name, NAME_REQUIRED);
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.insert(ContactField::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.insert(ContactField::Email, EMAIL_INVALID);
    }

    if fields.phone.trim().is_empty() {
        errors.insert(ContactField::Phone, PHONE_REQUIRED);
    }
    if fields.message.trim().is_empty() {
        errors.insert(ContactField::Message, MESSAGE_REQUIRED);
    }

    errors
}
