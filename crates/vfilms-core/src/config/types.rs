//! Configuration type definitions

use crate::counter::{CounterAnimator, CounterSpec};
use crate::errors::SiteError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://vernanbackend.ezlab.in/api/contact-us/";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub newsletter: NewsletterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
    /// Upper bound on the whole request, connect to last body byte
    #[serde(default = "default_contact_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
            timeout_ms: default_contact_timeout_ms(),
            notification_ttl_ms: default_notification_ttl_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    #[serde(default = "default_counters")]
    pub counters: Vec<CounterConfig>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
            counters: default_counters(),
        }
    }
}

impl StatsConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn animator(&self) -> CounterAnimator {
        CounterAnimator::with_counters(self.counters.iter().map(|c| (c.key.clone(), c.spec())))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    pub target: u64,
    pub duration_ms: u64,
    #[serde(default)]
    pub start_delay_ms: u64,
}

impl CounterConfig {
    pub fn spec(&self) -> CounterSpec {
        CounterSpec::new(self.target, self.duration_ms, self.start_delay_ms)
    }

    /// Label shown under the number; the key when none is configured
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterConfig {
    #[serde(default = "default_notification_ttl_ms")]
    pub message_ttl_ms: u64,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            message_ttl_ms: default_notification_ttl_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), SiteError> {
        let endpoint = self.contact.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(SiteError::ConfigError(format!(
                "contact.endpoint must be an http(s) URL, got '{}'",
                self.contact.endpoint
            )));
        }
        if self.contact.timeout_ms == 0 {
            return Err(SiteError::ConfigError(
                "contact.timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.contact.notification_ttl_ms == 0 {
            return Err(SiteError::ConfigError(
                "contact.notification_ttl_ms must be greater than 0".to_string(),
            ));
        }
        if self.newsletter.message_ttl_ms == 0 {
            return Err(SiteError::ConfigError(
                "newsletter.message_ttl_ms must be greater than 0".to_string(),
            ));
        }
        if self.stats.frame_interval_ms == 0 {
            return Err(SiteError::ConfigError(
                "stats.frame_interval_ms must be greater than 0".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for counter in &self.stats.counters {
            if counter.key.trim().is_empty() {
                return Err(SiteError::ConfigError("counter key cannot be empty".to_string()));
            }
            if !seen.insert(counter.key.as_str()) {
                return Err(SiteError::ConfigError(format!(
                    "duplicate counter key '{}'",
                    counter.key
                )));
            }
            if counter.duration_ms == 0 {
                return Err(SiteError::ConfigError(format!(
                    "counter '{}' must have a duration greater than 0",
                    counter.key
                )));
            }
        }

        Ok(())
    }
}

fn default_contact_endpoint() -> String {
    DEFAULT_CONTACT_ENDPOINT.to_string()
}

fn default_contact_timeout_ms() -> u64 {
    15_000
}

fn default_notification_ttl_ms() -> u64 {
    3_500
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_counters() -> Vec<CounterConfig> {
    let base = 1_100;
    vec![
        CounterConfig {
            key: "projects".to_string(),
            label: Some("Projects".to_string()),
            target: 220,
            duration_ms: base + 300,
            start_delay_ms: 0,
        },
        CounterConfig {
            key: "clients".to_string(),
            label: Some("Clients".to_string()),
            target: 99,
            duration_ms: base,
            start_delay_ms: 120,
        },
        CounterConfig {
            key: "awards".to_string(),
            label: Some("Awards".to_string()),
            target: 33,
            duration_ms: base - 200,
            start_delay_ms: 240,
        },
    ]
}
