//! Peripherals listed by the static catalog.

use super::FieldExtractor;
use crate::document::{partial, PartialDocument, Value};
use crate::peripherals::PERIPHERALS;
use crate::raw_table::RawTable;
use crate::schema::SchemaContext;

/// One name per matching fragment, in catalog order. Duplicates are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeripheralsExtractor;

impl FieldExtractor for PeripheralsExtractor {
    fn name(&self) -> &'static str {
        "peripherals"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let mut found = Vec::new();
        for peripheral in PERIPHERALS {
            let token = peripheral.match_token();
            for fragment in table.fragments(peripheral.gsm_field) {
                if fragment.text().to_lowercase().contains(&token) {
                    found.push(peripheral.wiki_spec_name);
                }
            }
        }

        if found.is_empty() {
            return None;
        }
        Some(partial("peripherals", Value::strings(found)))
    }
}
