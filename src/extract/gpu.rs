use once_cell::sync::Lazy;
use regex::Regex;

use super::FieldExtractor;
use crate::document::{partial, PartialDocument};
use crate::raw_table::{FieldCode, RawTable};
use crate::schema::SchemaContext;

static ADRENO: Lazy<Regex> = Lazy::new(|| Regex::new(r"Adreno \d+").unwrap());
static MALI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Mali-[a-zA-Z]?\d* *[a-zA-Z]*\d*").unwrap());

/// Adreno names pass through; Mali gets the `ARM` vendor prefix
#[derive(Debug, Clone, Copy, Default)]
pub struct GpuExtractor;

impl FieldExtractor for GpuExtractor {
    fn name(&self) -> &'static str {
        "gpu"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let gpu = table.first_text(FieldCode::Gpu)?;

        if let Some(m) = ADRENO.find(gpu) {
            return Some(partial("gpu", m.as_str()));
        }
        let mali = MALI.find(gpu)?;
        Some(partial("gpu", format!("ARM {}", mali.as_str().trim_end())))
    }
}
