//! Static catalog mapping wiki peripheral names to page fields.

use crate::raw_table::FieldCode;

/// A peripheral the wiki knows, and where to look for it on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peripheral {
    /// Name written to the output document
    pub wiki_spec_name: &'static str,
    /// Field whose fragments are searched
    pub gsm_field: FieldCode,
    /// On-page token when it differs from the wiki name
    pub gsm_name: Option<&'static str>,
}

impl Peripheral {
    const fn new(wiki_spec_name: &'static str, gsm_field: FieldCode) -> Self {
        Self {
            wiki_spec_name,
            gsm_field,
            gsm_name: None,
        }
    }

    const fn matching(
        wiki_spec_name: &'static str,
        gsm_field: FieldCode,
        gsm_name: &'static str,
    ) -> Self {
        Self {
            wiki_spec_name,
            gsm_field,
            gsm_name: Some(gsm_name),
        }
    }

    /// Lower-cased token searched for in the field
    pub fn match_token(&self) -> String {
        self.gsm_name.unwrap_or(self.wiki_spec_name).to_lowercase()
    }
}

pub const PERIPHERALS: &[Peripheral] = &[
    Peripheral::new("A-GPS", FieldCode::Gps),
    Peripheral::new("Accelerometer", FieldCode::Sensors),
    Peripheral::new("Barometer", FieldCode::Sensors),
    Peripheral::matching("BeiDou", FieldCode::Gps, "BDS"),
    Peripheral::new("Compass", FieldCode::Sensors),
    Peripheral::new("FM Radio", FieldCode::Radio),
    Peripheral::new("Fingerprint", FieldCode::Sensors),
    Peripheral::new("Galileo", FieldCode::Gps),
    Peripheral::new("GLONASS", FieldCode::Gps),
    Peripheral::matching("GPS", FieldCode::Gps, "Yes"),
    Peripheral::new("NAVIC", FieldCode::Gps),
    Peripheral::new("SBAS", FieldCode::Gps),
    Peripheral::new("QZSS", FieldCode::Gps),
    Peripheral::matching("Gesture sensor", FieldCode::Sensors, "gesture"),
    Peripheral::matching("Gyroscope", FieldCode::Sensors, "Gyro"),
    Peripheral::new("MHL", FieldCode::Usb),
    Peripheral::new("MHL 2", FieldCode::Usb),
    Peripheral::matching("NFC", FieldCode::Nfc, "Yes"),
    Peripheral::matching("Proximity sensor", FieldCode::Sensors, "proximity"),
];
