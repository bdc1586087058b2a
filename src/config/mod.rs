use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Endpoint configuration for the league backend. Loadable from a TOML
/// file; every field has a sensible default for a locally running server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the game submission endpoint, relative to `base_url`.
    #[serde(default = "default_submit_path")]
    pub submit_path: String,

    #[serde(default)]
    pub verbose: bool,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_submit_path() -> String {
    "/addgame".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            submit_path: default_submit_path(),
            verbose: false,
        }
    }
}

impl ClientConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn submit_path(&self) -> &str {
        &self.submit_path
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("submit_path", &self.submit_path)?;
        Ok(())
    }
}
