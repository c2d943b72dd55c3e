//! Field extraction pipeline.
//!
//! Every extractor is a pure function of the raw table and schema context.
//! [`Pipeline`] runs them in a fixed order and folds their contributions into
//! a [`Document`] initialized from the schema.

mod battery;
mod bluetooth;
mod camera;
mod cpu;
mod dimensions;
mod gpu;
mod memory;
mod model;
mod network;
mod peripherals;
mod release;
mod screen;

pub use battery::BatteryExtractor;
pub use bluetooth::{BluetoothProfileExtractor, BluetoothSpecExtractor};
pub use camera::CameraExtractor;
pub use cpu::{CpuCoresExtractor, CpuFrequencyExtractor, CpuModelExtractor};
pub use dimensions::DimensionsExtractor;
pub use gpu::GpuExtractor;
pub use memory::InternalMemoryExtractor;
pub use model::{ModelNameExtractor, ModelNumbersExtractor};
pub use network::NetworkExtractor;
pub use peripherals::PeripheralsExtractor;
pub use release::ReleaseDateExtractor;
pub use screen::{ScreenResolutionExtractor, ScreenSizeExtractor};

use crate::config::ExtractOptions;
use crate::document::{Document, PartialDocument};
use crate::raw_table::RawTable;
use crate::schema::SchemaContext;

/// Trait for a single field extractor.
///
/// Absence of data is normal: a missing field, an empty fragment list and
/// text that does not match all produce `None`.
pub trait FieldExtractor: Send + Sync {
    /// Stable name used in logs
    fn name(&self) -> &'static str;

    /// Extract this extractor's keys from the table
    ///
    /// # Returns
    /// * `Some(partial)` - keys to merge into the document
    /// * `None` - nothing recognized
    fn extract(&self, table: &RawTable, schema: &SchemaContext) -> Option<PartialDocument>;
}

/// Ordered list of extractors folded left-to-right over a fresh document.
///
/// Order matters for keys written by more than one stage: scalars are
/// last-writer-wins, and `bluetooth` is filled by the profile stage before the
/// spec stage.
pub struct Pipeline {
    extractors: Vec<Box<dyn FieldExtractor>>,
}

impl Pipeline {
    /// Empty pipeline, for callers assembling their own order
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Every extractor in the standard order
    pub fn standard(options: &ExtractOptions) -> Self {
        let mut pipeline = Self::new();
        pipeline.push(Box::new(ReleaseDateExtractor));
        pipeline.push(Box::new(PeripheralsExtractor));
        pipeline.push(Box::new(BatteryExtractor));
        pipeline.push(Box::new(BluetoothProfileExtractor));
        pipeline.push(Box::new(CpuCoresExtractor));
        pipeline.push(Box::new(CpuFrequencyExtractor));
        pipeline.push(Box::new(CpuModelExtractor));
        pipeline.push(Box::new(GpuExtractor));
        pipeline.push(Box::new(DimensionsExtractor));
        pipeline.push(Box::new(ModelNumbersExtractor));
        pipeline.push(Box::new(ScreenSizeExtractor));
        pipeline.push(Box::new(NetworkExtractor));
        pipeline.push(Box::new(CameraExtractor));
        pipeline.push(Box::new(ScreenResolutionExtractor));
        pipeline.push(Box::new(InternalMemoryExtractor::new(options.legacy_memory_collapse)));
        pipeline.push(Box::new(ModelNameExtractor));
        pipeline.push(Box::new(BluetoothSpecExtractor));
        pipeline
    }

    /// Append an extractor at the end of the order
    pub fn push(&mut self, extractor: Box<dyn FieldExtractor>) {
        self.extractors.push(extractor);
    }

    pub fn extractor_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Initialize a document from the schema and fold every contribution in.
    pub fn run(&self, table: &RawTable, schema: &SchemaContext) -> Document {
        let initial = Document::initialize(schema.required.as_slice());

        let document = self.extractors.iter().fold(initial, |mut document, extractor| {
            match extractor.extract(table, schema) {
                Some(contribution) => {
                    tracing::debug!(
                        extractor = extractor.name(),
                        keys = ?contribution.keys().collect::<Vec<_>>(),
                        "merged contribution"
                    );
                    document.merge(contribution);
                }
                None => {
                    tracing::trace!(extractor = extractor.name(), "no contribution");
                }
            }
            document
        });

        let unresolved = document.unresolved();
        if !unresolved.is_empty() {
            tracing::info!("{} required keys left unknown: {:?}", unresolved.len(), unresolved);
        }

        document
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard(&ExtractOptions::default())
    }
}
