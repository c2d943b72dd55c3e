//! CPU core count, cluster frequencies and core model.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::FieldExtractor;
use crate::document::{partial, PartialDocument};
use crate::raw_table::{FieldCode, RawTable};
use crate::schema::SchemaContext;

/// Checked in declaration order, first hit wins
const CPU_CORES: [(&str, u32); 5] = [
    ("Deca-core", 10),
    ("Octa-core", 8),
    ("Hexa-core", 6),
    ("Quad-core", 4),
    ("Dual-core", 2),
];

static FREQUENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*x\s*(\d+\.\d+)\s*GHz").unwrap());
static KRYO: Lazy<Regex> = Lazy::new(|| Regex::new(r"Kryo(?: (\d+))?").unwrap());
static KRAIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"Krait(?: (\d+))?").unwrap());
static CORTEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Cortex[-\s]A\d+").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct CpuCoresExtractor;

impl FieldExtractor for CpuCoresExtractor {
    fn name(&self) -> &'static str {
        "cpu_cores"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let cpu = table.first_text(FieldCode::Cpu)?.to_lowercase();
        let (_, cores) = CPU_CORES
            .iter()
            .find(|(name, _)| cpu.contains(&name.to_lowercase()))?;
        Some(partial("cpu_cores", cores.to_string()))
    }
}

/// `4 x 2.84 GHz + ...` for every `<count>x<freq> GHz` cluster
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuFrequencyExtractor;

impl FieldExtractor for CpuFrequencyExtractor {
    fn name(&self) -> &'static str {
        "cpu_freq"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let cpu = table.first_text(FieldCode::Cpu)?;
        let clusters: Vec<String> = FREQUENCY
            .captures_iter(cpu)
            .map(|caps| format!("{} x {} GHz", &caps[1], &caps[2]))
            .collect();

        if clusters.is_empty() {
            return None;
        }
        Some(partial("cpu_freq", clusters.join(" + ")))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CpuModelExtractor;

impl FieldExtractor for CpuModelExtractor {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let cpu = table.first_text(FieldCode::Cpu)?;
        cpu_model(cpu).map(|model| partial("cpu", model))
    }
}

fn cpu_model(cpu: &str) -> Option<String> {
    if let Some(caps) = KRYO.captures(cpu) {
        return Some(family("Kryo", &caps));
    }
    if let Some(caps) = KRAIT.captures(cpu) {
        return Some(family("Krait", &caps));
    }
    if cpu.contains("Atom") {
        return Some("Intel Atom".to_string());
    }
    if cpu.contains("Denver") {
        return Some("Denver".to_string());
    }

    let cores: Vec<String> = CORTEX
        .find_iter(cpu)
        .map(|m| m.as_str().replace(char::is_whitespace, "-"))
        .collect();
    if cores.is_empty() {
        return None;
    }
    Some(cores.join(" & "))
}

/// `Kryo` or `Kryo 585`
fn family(name: &str, caps: &Captures<'_>) -> String {
    match caps.get(1) {
        Some(number) => format!("{} {}", name, number.as_str()),
        None => name.to_string(),
    }
}
