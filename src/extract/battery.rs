//! Battery removability, capacity and technology.

use indexmap::IndexMap;

use super::FieldExtractor;
use crate::document::{partial, PartialDocument, Value};
use crate::raw_table::{FieldCode, RawTable};
use crate::schema::SchemaContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct BatteryExtractor;

impl FieldExtractor for BatteryExtractor {
    fn name(&self) -> &'static str {
        "battery"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let mut battery = IndexMap::new();

        // Only a positive "non-removable" is asserted; anything else stays unknown
        if let Some(description) = table.first_text(FieldCode::BatDescription) {
            if description.to_lowercase().contains("non-removable") {
                battery.insert("removable".to_string(), Value::Bool(false));
            }
        }
        if let Some(capacity) = table.first_text(FieldCode::BatSize) {
            battery.insert("capacity".to_string(), Value::from(capacity));
        }
        if let Some(tech) = table.first_text(FieldCode::BatType) {
            battery.insert("tech".to_string(), Value::from(tech));
        }

        if battery.is_empty() {
            return None;
        }
        Some(partial("battery", Value::Map(battery)))
    }
}
