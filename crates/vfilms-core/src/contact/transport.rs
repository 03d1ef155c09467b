//! Outbound contact request
//!
//! The submitter only needs "send this payload, give me status and body". Keeping that
//! behind [`ContactTransport`] lets tests and alternative hosts swap the HTTP client out.

use super::fields::ContactPayload;
use crate::errors::{SiteError, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Status and full body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only 200 and 201 count as accepted, whatever the body says
    pub fn is_accepted(&self) -> bool {
        matches!(self.status, 200 | 201)
    }

    /// `message` from a JSON object body, when it holds something worth showing:
    /// a non-empty string, a non-zero number or `true`
    pub fn server_message(&self) -> Option<String> {
        let value: Value = serde_json::from_str(&self.body).ok()?;
        match value.get("message")? {
            Value::String(message) if !message.is_empty() => Some(message.clone()),
            Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, payload: &ContactPayload) -> Result<TransportResponse, TransportError>;
}

pub struct HttpContactTransport {
    client: Client,
    endpoint: String,
    timeout_ms: u64,
}

impl HttpContactTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SiteError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                SiteError::HttpClientError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout_ms: timeout.as_millis() as u64,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn send(&self, payload: &ContactPayload) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(e, self.timeout_ms))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::from_reqwest(e, self.timeout_ms))?;

        log::debug!("Response status: {} body: {}", status, body);
        Ok(TransportResponse { status, body })
    }
}

impl std::fmt::Debug for HttpContactTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpContactTransport")
            .field("client", &"<reqwest::Client>")
            .field("endpoint", &self.endpoint)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_and_201_are_accepted() {
        assert!(TransportResponse::new(200, "").is_accepted());
        assert!(TransportResponse::new(201, "not json").is_accepted());
        assert!(!TransportResponse::new(204, "").is_accepted());
        assert!(!TransportResponse::new(302, "").is_accepted());
        assert!(!TransportResponse::new(500, "").is_accepted());
    }

    #[test]
    fn server_message_reads_json_message() {
        assert_eq!(
            TransportResponse::new(500, r#"{"message":"Server busy"}"#).server_message(),
            Some("Server busy".to_string())
        );
        assert_eq!(TransportResponse::new(500, r#"{"message":""}"#).server_message(), None);
        assert_eq!(TransportResponse::new(502, "<html>Bad Gateway</html>").server_message(), None);
        assert_eq!(TransportResponse::new(400, "").server_message(), None);
    }

    #[test]
    fn server_message_accepts_truthy_scalars() {
        let message = |body: &str| TransportResponse::new(500, body).server_message();
        assert_eq!(message(r#"{"message":42}"#), Some("42".to_string()));
        assert_eq!(message(r#"{"message":true}"#), Some("true".to_string()));
        assert_eq!(message(r#"{"message":0}"#), None);
        assert_eq!(message(r#"{"message":false}"#), None);
        assert_eq!(message(r#"{"message":null}"#), None);
    }

    #[test]
    fn builds_with_timeout() {
        let transport = HttpContactTransport::new(
            "http://127.0.0.1:9/api/contact-us/",
            Duration::from_millis(250),
        )
        .unwrap();
        assert_eq!(transport.endpoint(), "http://127.0.0.1:9/api/contact-us/");
        assert!(format!("{:?}", transport).contains("timeout_ms: 250"));
    }
}
