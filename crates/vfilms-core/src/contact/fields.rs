use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

static NOT_NAME_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());
static NOT_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

/// Strips characters a field does not accept as they are typed.
/// `name` keeps letters and whitespace, `phone` keeps digits, the rest pass through.
pub fn sanitize(field: ContactField, raw: &str) -> String {
    match field {
        ContactField::Name => NOT_NAME_CHAR.replace_all(raw, "").into_owned(),
        ContactField::Phone => NOT_DIGIT.replace_all(raw, "").into_owned(),
        ContactField::Email | ContactField::Message => raw.to_string(),
    }
}

/// Raw field values as currently shown in the inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.message.is_empty()
    }

    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// JSON body posted to the contact endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn name_keeps_letters_and_spaces() {
        assert_eq!(sanitize(ContactField::Name, "John123"), "John");
        assert_eq!(sanitize(ContactField::Name, "Mary-Jane O'Neil"), "MaryJane ONeil");
        assert_eq!(sanitize(ContactField::Name, "  Ana  "), "  Ana  ");
    }

    #[test]
    fn phone_keeps_digits() {
        assert_eq!(sanitize(ContactField::Phone, "abc12-34"), "1234");
        assert_eq!(sanitize(ContactField::Phone, "+91 12345 67890"), "911234567890");
        assert_eq!(sanitize(ContactField::Phone, "call me"), "");
    }

    #[test]
    fn email_and_message_untouched() {
        assert_eq!(sanitize(ContactField::Email, " a+b@c.io "), " a+b@c.io ");
        assert_eq!(sanitize(ContactField::Message, "Hi! 123 :)"), "Hi! 123 :)");
    }

    #[test]
    fn payload_is_trimmed() {
        let fields = ContactFields {
            name: "  Ravi ".into(),
            email: " ravi@example.com\n".into(),
            phone: "98765".into(),
            message: "\tShoot a documentary  ".into(),
        };
        let payload = fields.to_payload();
        assert_eq!(payload.name, "Ravi");
        assert_eq!(payload.email, "ravi@example.com");
        assert_eq!(payload.message, "Shoot a documentary");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["phone"], "98765");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn field_names_round_trip_through_strum() {
        assert_eq!(ContactField::Phone.to_string(), "phone");
        assert_eq!(ContactField::from_str("email").unwrap(), ContactField::Email);
        assert!(ContactField::from_str("address").is_err());
    }
}
