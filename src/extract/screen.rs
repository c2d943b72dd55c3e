//! Screen diagonal, pixel density and resolution.

use once_cell::sync::Lazy;
use regex::Regex;

use super::FieldExtractor;
use crate::document::{partial, PartialDocument, Value};
use crate::raw_table::{FieldCode, RawTable};
use crate::schema::SchemaContext;

const MM_PER_INCH: f64 = 25.4;

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());
static PPI: Lazy<Regex> = Lazy::new(|| Regex::new(r"(~?\d+) ppi density").unwrap());
static RESOLUTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s?x\s?(\d+)").unwrap());

/// `165 mm (6.5 in)` from a diagonal given in inches
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenSizeExtractor;

impl FieldExtractor for ScreenSizeExtractor {
    fn name(&self) -> &'static str {
        "screen"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let text = table.first_text(FieldCode::DisplaySize)?;
        let inches: f64 = LEADING_NUMBER.find(text)?.as_str().parse().ok()?;
        let mm = (inches * MM_PER_INCH).round() as i64;
        Some(partial("screen", format!("{} mm ({} in)", mm, inches)))
    }
}

/// `screen_ppi` and `screen_res`, each present only when recognized
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenResolutionExtractor;

impl FieldExtractor for ScreenResolutionExtractor {
    fn name(&self) -> &'static str {
        "screen_resolution"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let text = table.first_text(FieldCode::DisplayResolution)?;
        let mut out = PartialDocument::new();

        if let Some(caps) = PPI.captures(text) {
            out.insert("screen_ppi".to_string(), Value::from(&caps[1]));
        }
        if let Some(caps) = RESOLUTION.captures(text) {
            out.insert(
                "screen_res".to_string(),
                Value::from(format!("{}x{}", &caps[1], &caps[2])),
            );
        }

        if out.is_empty() {
            return None;
        }
        Some(out)
    }
}
