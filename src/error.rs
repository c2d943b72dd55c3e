//! Error type for the startup and output stages.
//!
//! Field extraction itself never fails: a missing or unparsable field is an
//! absent contribution, not an error. Everything here is fatal to a run.

use std::fmt;

/// Errors raised while loading configuration, fetching sources or writing output
#[derive(Debug)]
pub enum ScrapeError {
    Config(String),
    Schema(String),
    Fetch(String),
    Http {
        url: String,
        status: u16,
    },
    IoError(std::io::Error),
    YamlError(serde_yaml::Error),
    JsonError(serde_json::Error),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ScrapeError::Schema(msg) => write!(f, "Schema error: {}", msg),
            ScrapeError::Fetch(msg) => write!(f, "Fetch error: {}", msg),
            ScrapeError::Http { url, status } => {
                write!(f, "HTTP {} while fetching {}", status, url)
            }
            ScrapeError::IoError(e) => write!(f, "IO error: {}", e),
            ScrapeError::YamlError(e) => write!(f, "YAML error: {}", e),
            ScrapeError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for ScrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScrapeError::IoError(e) => Some(e),
            ScrapeError::YamlError(e) => Some(e),
            ScrapeError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScrapeError {
    fn from(err: std::io::Error) -> Self {
        ScrapeError::IoError(err)
    }
}

impl From<serde_yaml::Error> for ScrapeError {
    fn from(err: serde_yaml::Error) -> Self {
        ScrapeError::YamlError(err)
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapeError::JsonError(err)
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Fetch(err.to_string())
    }
}
