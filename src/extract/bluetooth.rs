//! Bluetooth version string and audio profile.

use once_cell::sync::Lazy;
use regex::Regex;

use super::FieldExtractor;
use crate::document::{nested, PartialDocument, Value};
use crate::raw_table::{FieldCode, RawTable};
use crate::schema::SchemaContext;

static VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d+\.?\d*[a-zA-Z]?)\b").unwrap());

/// Only 4.0 carries a separate LE designation
const LE_VERSION: &str = "4.0";

/// Highest-priority profile first
const PROFILES: [(&str, &str); 3] = [
    ("aptX HD", "A2DP + aptX HD"),
    ("aptX", "A2DP + aptX"),
    ("A2DP", "A2DP"),
];

/// Writes `bluetooth.spec`, e.g. `4.0 + LE` or `5`
#[derive(Debug, Clone, Copy, Default)]
pub struct BluetoothSpecExtractor;

impl FieldExtractor for BluetoothSpecExtractor {
    fn name(&self) -> &'static str {
        "bluetooth_spec"
    }

    fn extract(&self, table: &RawTable, schema: &SchemaContext) -> Option<PartialDocument> {
        let text = table.first_text(FieldCode::Bluetooth)?;

        let mut version = VERSION.captures(text)?.get(1)?.as_str();
        if version == "5.0" {
            version = "5";
        }

        let mut parts = vec![version];
        for token in &schema.bluetooth_additional {
            if !text.contains(token.as_str()) {
                continue;
            }
            if token == "LE" && version != LE_VERSION {
                continue;
            }
            parts.push(token);
        }

        Some(nested("bluetooth", "spec", parts.join(" + ")))
    }
}

/// Writes `bluetooth.profiles` with at most one entry
#[derive(Debug, Clone, Copy, Default)]
pub struct BluetoothProfileExtractor;

impl FieldExtractor for BluetoothProfileExtractor {
    fn name(&self) -> &'static str {
        "bluetooth_profile"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let items: Vec<&str> = table.first_text(FieldCode::Bluetooth)?.split(", ").collect();

        let (_, profile) = PROFILES
            .iter()
            .find(|(token, _)| items.contains(token))?;

        Some(nested("bluetooth", "profiles", Value::strings([*profile])))
    }
}
