//! Configuration loader for YAML files and environment overrides

use crate::config::types::SiteConfig;
use crate::errors::SiteError;
use std::env;
use std::path::Path;
use tokio::fs;

/// Overrides `contact.endpoint` when set
pub const CONTACT_ENDPOINT_ENV: &str = "VFILMS_CONTACT_ENDPOINT";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<SiteConfig, SiteError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|e| {
            SiteError::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        log::debug!("loaded config from {}", path.display());
        Self::from_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<SiteConfig, SiteError> {
        let mut config: SiteConfig = if content.trim().is_empty() {
            SiteConfig::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| SiteError::ConfigError(format!("Failed to parse YAML config: {}", e)))?
        };

        Self::resolve_environment(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides, for running without a config file
    pub fn from_env() -> Result<SiteConfig, SiteError> {
        Self::from_str("")
    }

    fn resolve_environment(config: &mut SiteConfig) {
        if let Ok(endpoint) = env::var(CONTACT_ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                log::debug!("contact endpoint overridden by {}", CONTACT_ENDPOINT_ENV);
                config.contact.endpoint = endpoint.trim().to_string();
            }
        }
    }
}
