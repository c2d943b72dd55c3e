use once_cell::sync::Lazy;
use regex::Regex;

use super::FieldExtractor;
use crate::document::{PartialDocument, Value};
use crate::raw_table::{FieldCode, RawTable};
use crate::schema::SchemaContext;

static TRIPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*x\s*(\d+(?:\.\d+)?)\s*x\s*(\d+(?:\.\d+)?)").unwrap()
});

const AXES: [&str; 3] = ["height", "width", "depth"];

/// Height, width and depth from `mm (in)` triples.
///
/// The first triple is millimetres and the second inches; with fewer than two
/// triples the field is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionsExtractor;

impl FieldExtractor for DimensionsExtractor {
    fn name(&self) -> &'static str {
        "dimensions"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let text = table.first_text(FieldCode::Dimensions)?;
        let mut triples = TRIPLE.captures_iter(text);
        let mm = triples.next()?;
        let inches = triples.next()?;

        Some(
            AXES.iter()
                .enumerate()
                .map(|(i, axis)| {
                    let value = format!("{} mm ({} in)", &mm[i + 1], &inches[i + 1]);
                    (axis.to_string(), Value::from(value))
                })
                .collect(),
        )
    }
}
