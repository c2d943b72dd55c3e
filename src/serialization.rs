//! Writers for finished documents.

use std::io::Write;

use crate::config::{OutputFormat, OutputOptions};
use crate::document::Document;
use crate::error::ScrapeError;

/// YAML writer
///
/// Writes one document as a YAML mapping.
pub struct YamlWriter<W: Write> {
    writer: W,
    sort_keys: bool,
}

impl<W: Write> YamlWriter<W> {
    pub fn new(writer: W, sort_keys: bool) -> Self {
        Self { writer, sort_keys }
    }

    pub fn write(&mut self, document: &Document) -> Result<(), ScrapeError> {
        let yaml = if self.sort_keys {
            serde_yaml::to_string(&document.sorted())?
        } else {
            serde_yaml::to_string(document)?
        };
        write!(self.writer, "{}", yaml)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ScrapeError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Pretty-printed JSON writer
pub struct JsonWriter<W: Write> {
    writer: W,
    sort_keys: bool,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, sort_keys: bool) -> Self {
        Self { writer, sort_keys }
    }

    pub fn write(&mut self, document: &Document) -> Result<(), ScrapeError> {
        let json = if self.sort_keys {
            serde_json::to_string_pretty(&document.sorted())?
        } else {
            serde_json::to_string_pretty(document)?
        };
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ScrapeError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write `document` in the configured format and flush
pub fn write_document<W: Write>(
    writer: W,
    document: &Document,
    options: &OutputOptions,
) -> Result<(), ScrapeError> {
    match options.format {
        OutputFormat::Yaml => {
            let mut out = YamlWriter::new(writer, options.sort_keys);
            out.write(document)?;
            out.flush()
        }
        OutputFormat::Json => {
            let mut out = JsonWriter::new(writer, options.sort_keys);
            out.write(document)?;
            out.flush()
        }
    }
}
