//! Site configuration
//!
//! YAML files with every field defaulted, so an empty document yields the live site's
//! settings. Values are checked once after loading; components trust what they are given.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;


use crate::errors::SiteError;
use std::path::Path;

/// Load a configuration from a YAML file
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<SiteConfig, SiteError> {
    ConfigLoader::from_file(path).await
}

/// Validate a configuration
pub fn validate_config(config: &SiteConfig) -> Result<(), SiteError> {
    config.validate()
}
