//! Raw key/value table scraped from a device detail page.
//!
//! Field codes form a closed vocabulary: anything the page carries that no
//! extractor reads is rejected when the table is built.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

/// A field code understood by the extraction engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCode {
    Year,
    Gps,
    Sensors,
    Radio,
    Usb,
    Nfc,
    BatDescription,
    BatSize,
    BatType,
    Bluetooth,
    Cpu,
    Gpu,
    Dimensions,
    ModelName,
    Models,
    DisplaySize,
    DisplayResolution,
    Net2g,
    Net3g,
    Net4g,
    Net5g,
    Cam1Modules,
    Cam2Modules,
    InternalMemory,
}

impl FieldCode {
    pub const ALL: [FieldCode; 24] = [
        FieldCode::Year,
        FieldCode::Gps,
        FieldCode::Sensors,
        FieldCode::Radio,
        FieldCode::Usb,
        FieldCode::Nfc,
        FieldCode::BatDescription,
        FieldCode::BatSize,
        FieldCode::BatType,
        FieldCode::Bluetooth,
        FieldCode::Cpu,
        FieldCode::Gpu,
        FieldCode::Dimensions,
        FieldCode::ModelName,
        FieldCode::Models,
        FieldCode::DisplaySize,
        FieldCode::DisplayResolution,
        FieldCode::Net2g,
        FieldCode::Net3g,
        FieldCode::Net4g,
        FieldCode::Net5g,
        FieldCode::Cam1Modules,
        FieldCode::Cam2Modules,
        FieldCode::InternalMemory,
    ];

    /// The `data-spec` token used on the page
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldCode::Year => "year",
            FieldCode::Gps => "gps",
            FieldCode::Sensors => "sensors",
            FieldCode::Radio => "radio",
            FieldCode::Usb => "usb",
            FieldCode::Nfc => "nfc",
            FieldCode::BatDescription => "batdescription1",
            FieldCode::BatSize => "batsize-hl",
            FieldCode::BatType => "battype-hl",
            FieldCode::Bluetooth => "bluetooth",
            FieldCode::Cpu => "cpu",
            FieldCode::Gpu => "gpu",
            FieldCode::Dimensions => "dimensions",
            FieldCode::ModelName => "modelname",
            FieldCode::Models => "models",
            FieldCode::DisplaySize => "displaysize-hl",
            FieldCode::DisplayResolution => "displayresolution",
            FieldCode::Net2g => "net2g",
            FieldCode::Net3g => "net3g",
            FieldCode::Net4g => "net4g",
            FieldCode::Net5g => "net5g",
            FieldCode::Cam1Modules => "cam1modules",
            FieldCode::Cam2Modules => "cam2modules",
            FieldCode::InternalMemory => "internalmemory",
        }
    }
}

impl fmt::Display for FieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a page token is outside the known vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldCode(pub String);

impl fmt::Display for UnknownFieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown field code: {}", self.0)
    }
}

impl std::error::Error for UnknownFieldCode {}

impl FromStr for FieldCode {
    type Err = UnknownFieldCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldCode::ALL
            .iter()
            .find(|code| code.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownFieldCode(s.to_string()))
    }
}

/// A structured sub-node of a field's content (e.g. a `<span>` or `<br>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Element name
    pub tag: String,
    /// Concatenated text of every descendant
    pub text: String,
    /// Direct children in document order
    pub children: Vec<Fragment>,
}

/// One content item of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Node(Node),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Text(s) => s,
            Fragment::Node(node) => &node.text,
        }
    }

    /// Bare line break between the interesting fragments
    pub fn is_newline(&self) -> bool {
        matches!(self, Fragment::Text(s) if s == "\n")
    }

    /// Text one level down for nodes, own text for plain strings
    pub fn unwrap_node(&self) -> Option<&str> {
        match self {
            Fragment::Text(s) => Some(s),
            Fragment::Node(node) => node.children.first().map(Fragment::text),
        }
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment::Text(s.to_string())
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment::Text(s)
    }
}

/// A row of the network table, recorded in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkRow {
    /// Row tagged with a generation (or other) code and its cell text
    Spec { code: String, text: String },
    /// Annotation row whose cells extend the previous generation
    Optional { info: Vec<String> },
}

/// Field code -> ordered fragment list, plus the network table rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    fields: IndexMap<FieldCode, Vec<Fragment>>,
    network: Vec<NetworkRow>,
}

impl RawTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the fragments for a field; a repeated code replaces the earlier entry
    pub fn insert(&mut self, code: FieldCode, fragments: Vec<Fragment>) {
        self.fields.insert(code, fragments);
    }

    /// Store fragments under a page token, returning `false` for unknown tokens
    pub fn insert_raw(&mut self, code: &str, fragments: Vec<Fragment>) -> bool {
        match code.parse::<FieldCode>() {
            Ok(code) => {
                self.insert(code, fragments);
                true
            }
            Err(_) => false,
        }
    }

    /// Builder shorthand for a single plain-text fragment
    pub fn with_text(mut self, code: FieldCode, text: &str) -> Self {
        self.insert(code, vec![Fragment::from(text)]);
        self
    }

    pub fn with_network_rows(mut self, rows: Vec<NetworkRow>) -> Self {
        self.network = rows;
        self
    }

    /// All fragments for a field; empty when the field is absent
    pub fn fragments(&self, code: FieldCode) -> &[Fragment] {
        self.fields.get(&code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Text of the first fragment of a field
    pub fn first_text(&self, code: FieldCode) -> Option<&str> {
        self.fragments(code).first().map(Fragment::text)
    }

    pub fn contains(&self, code: FieldCode) -> bool {
        self.fields.contains_key(&code)
    }

    pub fn set_network_rows(&mut self, rows: Vec<NetworkRow>) {
        self.network = rows;
    }

    pub fn network_rows(&self) -> &[NetworkRow] {
        &self.network
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
