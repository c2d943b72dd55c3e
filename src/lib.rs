//! # devspec: Device Specification Extraction
//!
//! devspec turns the key/value spec table of a device detail page into a
//! normalized device document conforming to the LineageOS wiki schema.
//!
//! ## Pipeline
//!
//! ```text
//! page markup -> RawTable -> Pipeline (17 extractors) -> Document -> YAML
//!                              ^
//!                        SchemaContext
//! ```
//!
//! - **Raw table**: field code -> content fragments, plus the network table rows
//! - **Extractors**: independent, best-effort transforms; absence is `None`
//! - **Document**: required keys start as `REQUIRED, BUT UNKNOWN` and are
//!   overwritten as extractors resolve them
//!
//! ## Example
//!
//! ```ignore
//! use devspec::{parse_raw_table, Pipeline, SchemaContext};
//!
//! let schema = SchemaContext::load_from_file("schema-06.yml")?;
//! let table = parse_raw_table(&std::fs::read_to_string("pixel5.html")?);
//! let document = Pipeline::default().run(&table, &schema);
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod html;
pub mod peripherals;
pub mod raw_table;
pub mod schema;
pub mod serialization;

pub use config::{Config, ExtractOptions, OutputFormat, OutputOptions};
pub use document::{Document, PartialDocument, Value, UNKNOWN};
pub use error::ScrapeError;
pub use extract::{FieldExtractor, Pipeline};
pub use fetch::Fetcher;
pub use html::parse_raw_table;
pub use raw_table::{FieldCode, Fragment, NetworkRow, RawTable};
pub use schema::SchemaContext;
pub use serialization::write_document;

/// Parse page markup and run the standard pipeline over it
pub fn extract_document(html: &str, schema: &SchemaContext, options: &ExtractOptions) -> Document {
    let table = parse_raw_table(html);
    Pipeline::standard(options).run(&table, schema)
}
