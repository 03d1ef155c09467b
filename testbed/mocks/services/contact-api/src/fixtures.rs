use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the endpoint answers with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyFixture {
    #[serde(default = "default_status")]
    pub status: u16,
    /// Sent verbatim; not required to be JSON
    #[serde(default)]
    pub body: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub delay_ms: u64,
}

impl Default for ReplyFixture {
    fn default() -> Self {
        Self {
            status: default_status(),
            body: r#"{"message":"Contact request received"}"#.to_string(),
            content_type: default_content_type(),
            delay_ms: 0,
        }
    }
}

impl ReplyFixture {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            ..Self::default()
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "text/plain".to_string(),
            delay_ms: 0,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn from_yaml(yaml_content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml_content)?)
    }
}

/// One request as the endpoint saw it
#[derive(Debug, Clone, Serialize)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    /// `Value::Null` when the body was not JSON
    pub body: Value,
}

fn default_status() -> u16 {
    201
}

fn default_content_type() -> String {
    "application/json".to_string()
}
