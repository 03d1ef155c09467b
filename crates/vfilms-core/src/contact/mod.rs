//! Contact form: sanitize-on-edit, validation, one POST per valid submit

pub mod fields;
pub mod state;
pub mod submitter;
pub mod transport;
pub mod validation;

pub use fields::{sanitize, ContactField, ContactFields, ContactPayload};
pub use state::{FormState, SubmissionStatus};
pub use submitter::ContactFormSubmitter;
pub use transport::{ContactTransport, HttpContactTransport, TransportResponse};
pub use validation::{is_valid_email, validate, FieldErrors};
