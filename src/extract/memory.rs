//! RAM and storage configurations from `internalmemory`.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use super::FieldExtractor;
use crate::document::{partial, PartialDocument, Value};
use crate::raw_table::{FieldCode, RawTable};
use crate::schema::SchemaContext;

static CONFIGURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s?GB (\d+)\s?GB RAM").unwrap());

/// `ram` and `storage` as `/`-joined sizes, e.g. `8/12 GB`.
///
/// Each list is reduced to its distinct values in first-seen order. With
/// `legacy_collapse` the historical behavior is kept instead: only a fully
/// uniform list collapses, and a uniform storage list replaces the RAM list.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternalMemoryExtractor {
    legacy_collapse: bool,
}

impl InternalMemoryExtractor {
    pub fn new(legacy_collapse: bool) -> Self {
        Self { legacy_collapse }
    }
}

impl FieldExtractor for InternalMemoryExtractor {
    fn name(&self) -> &'static str {
        "internal_memory"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let text = table.first_text(FieldCode::InternalMemory)?;

        let (storage, ram): (Vec<&str>, Vec<&str>) = CONFIGURATION
            .captures_iter(text)
            .map(|caps| {
                let (_, [storage, ram]) = caps.extract();
                (storage, ram)
            })
            .unzip();

        if ram.is_empty() {
            return None;
        }

        let (ram, storage) = if self.legacy_collapse {
            legacy_collapse(ram, storage)
        } else {
            (distinct(&ram), distinct(&storage))
        };

        let mut out = partial("ram", format!("{} GB", ram.join("/")));
        out.insert(
            "storage".to_string(),
            Value::from(format!("{} GB", storage.join("/"))),
        );
        Some(out)
    }
}

fn distinct<'a>(values: &[&'a str]) -> Vec<&'a str> {
    values.iter().copied().collect::<IndexSet<_>>().into_iter().collect()
}

fn is_uniform(values: &[&str]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}

fn legacy_collapse<'a>(mut ram: Vec<&'a str>, storage: Vec<&'a str>) -> (Vec<&'a str>, Vec<&'a str>) {
    if is_uniform(&ram) {
        ram.truncate(1);
    }
    if is_uniform(&storage) {
        tracing::debug!("legacy memory collapse: RAM list replaced by storage value");
        ram = vec![storage[0]];
    }
    (ram, storage)
}
