//! Error types for the site core
//!
//! Configuration and I/O problems surface as [`SiteError`]. A contact submission never
//! escapes as a panic: every attempt ends in a defined form state, and the accompanying
//! [`SubmitError`] only tells the host which branch of the taxonomy was taken.

use crate::contact::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    IoError(String),
    #[error("HTTP client error: {0}")]
    HttpClientError(String),
}

impl From<std::io::Error> for SiteError {
    fn from(err: std::io::Error) -> Self {
        SiteError::IoError(err.to_string())
    }
}

/// Failure of the outbound contact request before any HTTP status was received
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out after {0}ms")]
    Timeout(u64),
    #[error("could not reach server: {0}")]
    Connect(String),
    #[error("failed to read response: {0}")]
    Body(String),
    #[error("{0}")]
    Request(String),
}

impl TransportError {
    pub fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(timeout_ms)
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            TransportError::Body(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// Why a submit attempt did not end in `Succeeded`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("server returned {status}")]
    Server { status: u16, message: Option<String> },
}
