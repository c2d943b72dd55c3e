//! Mobile network generations from the network table rows.

use indexmap::IndexMap;

use super::FieldExtractor;
use crate::document::{partial, PartialDocument, Value};
use crate::raw_table::{NetworkRow, RawTable};
use crate::schema::SchemaContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkExtractor;

impl FieldExtractor for NetworkExtractor {
    fn name(&self) -> &'static str {
        "network"
    }

    fn extract(&self, table: &RawTable, _schema: &SchemaContext) -> Option<PartialDocument> {
        let rows = table.network_rows();
        if rows.is_empty() {
            return None;
        }

        let info = group_rows(rows);
        let mut networks = Vec::new();

        if let Some(entries) = info.get("net2g") {
            if any_contains(entries, &["GSM"]) {
                networks.push("2G GSM");
            }
            if any_contains(entries, &["CDMA"]) {
                networks.push("2G CDMA");
            }
        }
        if let Some(entries) = info.get("net3g") {
            if any_contains(entries, &["HSDPA", "UMTS"]) {
                networks.push("3G UMTS");
            }
            if any_contains(entries, &["CDMA"]) {
                networks.push("3G CDMA2000");
            }
        }
        if info.get("net4g").is_some_and(|entries| !entries.is_empty()) {
            networks.push("4G LTE");
        }
        if info.get("net5g").is_some_and(|entries| !entries.is_empty()) {
            networks.push("5G");
        }

        if networks.is_empty() {
            return None;
        }
        Some(partial("network", Value::strings(networks)))
    }
}

/// Per-code text lists; optional rows extend the most recent code
fn group_rows(rows: &[NetworkRow]) -> IndexMap<&str, Vec<&str>> {
    let mut info: IndexMap<&str, Vec<&str>> = IndexMap::new();

    for row in rows {
        match row {
            NetworkRow::Spec { code, .. } if code == "speed" => continue,
            NetworkRow::Spec { code, text } => {
                info.insert(code.as_str(), vec![text.as_str()]);
            }
            NetworkRow::Optional { info: extra } => {
                if let Some((_, last)) = info.last_mut() {
                    last.extend(extra.iter().map(String::as_str));
                }
            }
        }
    }
    info
}

fn any_contains(entries: &[&str], needles: &[&str]) -> bool {
    entries
        .iter()
        .any(|entry| needles.iter().any(|needle| entry.contains(needle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::test_support::schema;

    fn spec(code: &str, text: &str) -> NetworkRow {
        NetworkRow::Spec {
            code: code.to_string(),
            text: text.to_string(),
        }
    }

    fn networks(rows: Vec<NetworkRow>) -> Option<Value> {
        let table = RawTable::new().with_network_rows(rows);
        NetworkExtractor
            .extract(&table, &schema())
            .and_then(|out| out.get("network").cloned())
    }

    #[test]
    fn test_gsm_and_lte() {
        let rows = vec![
            spec("net2g", "GSM 850 / 900 / 1800 / 1900"),
            spec("net4g", "1, 2, 3, 4, 5, 7, 8"),
        ];
        assert_eq!(networks(rows), Some(Value::strings(["2G GSM", "4G LTE"])));
    }

    #[test]
    fn test_full_fixed_order() {
        let rows = vec![
            spec("nettech", "GSM / CDMA / HSPA / EVDO / LTE / 5G"),
            spec("net2g", "GSM 850 / 900 / 1800 / 1900 "),
            NetworkRow::Optional {
                info: vec!["CDMA 800 / 1900".to_string()],
            },
            spec("net3g", "HSDPA 800 / 850 / 900 / 1700(AWS) / 1900 / 2100 "),
            NetworkRow::Optional {
                info: vec!["CDMA2000 1xEV-DO ".to_string()],
            },
            spec("net4g", "1, 2, 3, 4, 5, 7"),
            spec("net5g", "1, 3, 5, 7, 28, 41, 77, 78 SA/NSA"),
            spec("speed", "HSPA 42.2/5.76 Mbps, LTE-A, 5G"),
        ];
        assert_eq!(
            networks(rows),
            Some(Value::strings([
                "2G GSM",
                "2G CDMA",
                "3G UMTS",
                "3G CDMA2000",
                "4G LTE",
                "5G"
            ]))
        );
    }

    #[test]
    fn test_optional_row_before_any_spec_ignored() {
        let rows = vec![
            NetworkRow::Optional {
                info: vec!["CDMA 800".to_string()],
            },
            spec("net2g", "GSM 900"),
        ];
        assert_eq!(networks(rows), Some(Value::strings(["2G GSM"])));
    }

    #[test]
    fn test_no_recognized_generation() {
        let rows = vec![spec("net2g", "N/A"), spec("speed", "No cellular connectivity")];
        assert_eq!(networks(rows), None);
    }

    #[test]
    fn test_no_table() {
        assert_eq!(networks(vec![]), None);
    }
}
