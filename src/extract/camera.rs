use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::FieldExtractor;
use crate::document::{partial, PartialDocument, Value};
use crate::raw_table::{FieldCode, RawTable};
use crate::schema::SchemaContext;

static MEGAPIXELS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.?\d* MP").unwrap());

/// One camera per main/selfie module fragment carrying a megapixel figure
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraExtractor;

impl FieldExtractor for CameraExtractor {
    fn name(&self) -> &'static str {
        "cameras"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let cameras: Vec<Value> = table
            .fragments(FieldCode::Cam1Modules)
            .iter()
            .chain(table.fragments(FieldCode::Cam2Modules))
            .filter(|fragment| !fragment.is_newline())
            .filter_map(|fragment| fragment.unwrap_node())
            .filter_map(|text| MEGAPIXELS.find(text))
            .map(|resolution| camera(resolution.as_str()))
            .collect();

        if cameras.is_empty() {
            return None;
        }
        Some(partial("cameras", Value::List(cameras)))
    }
}

fn camera(info: &str) -> Value {
    let mut camera = IndexMap::new();
    // Flash is not published per module
    camera.insert("flash".to_string(), Value::from(""));
    camera.insert("info".to_string(), Value::from(info));
    Value::Map(camera)
}
