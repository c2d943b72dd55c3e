//! Runtime configuration.
//!
//! Defaults come from the environment (after `.env` is loaded by the binary);
//! a YAML file may override any subset of fields.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

const DEFAULT_BASE_URL: &str = "https://www.gsmarena.com";
const DEFAULT_SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/LineageOS/lineage_wiki/master/test/schema-06.yml";
const DEFAULT_USER_AGENT: &str = concat!("devspec/", env!("CARGO_PKG_VERSION"));

/// Knobs that change extractor behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Reproduce the historical internal-memory collapse, which replaced the
    /// RAM list with the storage value whenever storage was uniform.
    pub legacy_memory_collapse: bool,
}

/// Output encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Sort keys at every level before writing
    pub sort_keys: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Yaml,
            sort_keys: true,
        }
    }
}

/// Top-level configuration for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device pages live at `{page_base_url}/{page}.php`
    pub page_base_url: String,
    pub schema_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub extract: ExtractOptions,
    pub output: OutputOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_base_url: std::env::var("DEVSPEC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            schema_url: std::env::var("DEVSPEC_SCHEMA_URL")
                .unwrap_or_else(|_| DEFAULT_SCHEMA_URL.to_string()),
            user_agent: std::env::var("DEVSPEC_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            timeout_secs: 30,
            extract: ExtractOptions::default(),
            output: OutputOptions::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file; omitted fields keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ScrapeError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml_str(&contents)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ScrapeError> {
        let config: Config = serde_yaml::from_str(contents)
            .map_err(|e| ScrapeError::Config(format!("Failed to parse YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.page_base_url.trim().is_empty() {
            return Err(ScrapeError::Config("page_base_url cannot be empty".to_string()));
        }
        if self.schema_url.trim().is_empty() {
            return Err(ScrapeError::Config("schema_url cannot be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ScrapeError::Config("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URL of a device detail page
    pub fn page_url(&self, page: &str) -> String {
        format!("{}/{}.php", self.page_base_url.trim_end_matches('/'), page)
    }
}
