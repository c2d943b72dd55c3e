//! Model name, vendor identifiers and model numbers.

use regex::RegexBuilder;

use super::FieldExtractor;
use crate::document::{partial, PartialDocument, Value};
use crate::raw_table::{FieldCode, RawTable};
use crate::schema::SchemaContext;

/// Splits `modelname` into vendor and device name.
///
/// Vendors are tested in schema order and the last one that matches wins, so
/// `Sony Ericsson` beats `Sony` when the enumeration lists it later.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelNameExtractor;

impl FieldExtractor for ModelNameExtractor {
    fn name(&self) -> &'static str {
        "model_name"
    }

    fn extract(&self, table: &RawTable, schema: &SchemaContext) -> Option<PartialDocument> {
        let model_name = table.first_text(FieldCode::ModelName)?;
        let lowered = model_name.to_lowercase();

        let vendor = schema
            .vendors
            .iter()
            .filter(|vendor| lowered.contains(&vendor.to_lowercase()))
            .last()?;

        let short = vendor_slug(vendor);
        let mut out = partial("name", strip_vendor(model_name, vendor));
        out.insert("vendor".to_string(), Value::from(vendor.as_str()));
        out.insert("vendor_short".to_string(), Value::from(short.as_str()));
        out.insert("tree".to_string(), Value::from(format!("android_device_{}_CODENAME", short)));
        out.insert("kernel".to_string(), Value::from(format!("android_kernel_{}_CODENAME", short)));
        Some(out)
    }
}

/// Remove the vendor (and one following space) from the model name
fn strip_vendor(model_name: &str, vendor: &str) -> String {
    let stripped = RegexBuilder::new(&format!(r"{}\s?", regex::escape(vendor)))
        .case_insensitive(true)
        .build()
        .map(|re| re.replacen(model_name, 1, "").into_owned())
        .unwrap_or_else(|_| model_name.to_string());
    stripped.trim().to_string()
}

/// Lower-case vendor name with anything but ASCII alphanumerics dropped
fn vendor_slug(vendor: &str) -> String {
    vendor
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}

/// Comma-separated list of model numbers
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelNumbersExtractor;

impl FieldExtractor for ModelNumbersExtractor {
    fn name(&self) -> &'static str {
        "models"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let models = table.first_text(FieldCode::Models)?;
        Some(partial("models", Value::strings(models.split(", "))))
    }
}
