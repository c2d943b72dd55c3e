//! Schema context loader.
//!
//! Reads the three things extraction needs from the LineageOS wiki device
//! schema: the required-field list, the vendor enumeration and the set of
//! Bluetooth additional-spec tokens.

use std::fs;
use std::path::Path;

use indexmap::IndexSet;
use serde_yaml::Value as YamlValue;

use crate::error::ScrapeError;

/// Read-only view of the target schema, loaded once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaContext {
    /// Keys that must appear in every output document
    pub required: Vec<String>,

    /// Vendor names in schema order
    pub vendors: Vec<String>,

    /// Tokens such as `LE` or `EDR` that may follow a Bluetooth version
    pub bluetooth_additional: Vec<String>,
}

impl SchemaContext {
    /// Parse a schema document.
    ///
    /// # Errors
    /// Returns `ScrapeError::Schema` if `required` or the vendor enumeration is
    /// missing. An absent Bluetooth spec enumeration just yields no tokens.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ScrapeError> {
        let yaml: YamlValue = serde_yaml::from_str(contents)?;

        let required = string_list(
            yaml.get("required")
                .ok_or_else(|| ScrapeError::Schema("Schema missing 'required' field".to_string()))?,
            "required",
        )?;

        let vendors = string_list(
            yaml.get("properties")
                .and_then(|p| p.get("vendor"))
                .and_then(|v| v.get("enum"))
                .ok_or_else(|| {
                    ScrapeError::Schema("Schema missing 'properties.vendor.enum'".to_string())
                })?,
            "properties.vendor.enum",
        )?;

        let bluetooth_specs = match yaml
            .get("properties")
            .and_then(|p| p.get("bluetooth"))
            .and_then(|b| b.get("properties"))
            .and_then(|p| p.get("spec"))
            .and_then(|s| s.get("enum"))
        {
            Some(value) => string_list(value, "properties.bluetooth.properties.spec.enum")?,
            None => Vec::new(),
        };

        Ok(Self {
            required,
            vendors,
            bluetooth_additional: additional_tokens(&bluetooth_specs),
        })
    }

    /// Load a schema document from disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ScrapeError::Schema(format!("Failed to read schema file {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&contents)
    }
}

fn string_list(value: &YamlValue, field: &str) -> Result<Vec<String>, ScrapeError> {
    let items = value
        .as_sequence()
        .ok_or_else(|| ScrapeError::Schema(format!("Schema field '{}' is not a list", field)))?;

    // Enumerations occasionally hold numbers (e.g. "5.0" written bare as 5.0)
    Ok(items
        .iter()
        .filter_map(|item| match item {
            YamlValue::String(s) => Some(s.clone()),
            YamlValue::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect())
}

/// Tokens after the version in entries such as `4.0 + LE`, first-seen order
fn additional_tokens(specs: &[String]) -> Vec<String> {
    let mut tokens = IndexSet::new();
    for spec in specs {
        for token in spec.split(" + ").skip(1) {
            let token = token.trim();
            if !token.is_empty() {
                tokens.insert(token.to_string());
            }
        }
    }
    tokens.into_iter().collect()
}
