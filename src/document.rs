//! The normalized device document and its merge rule.
//!
//! A document starts from the schema's required keys, all holding the
//! [`UNKNOWN`] sentinel, and absorbs one partial contribution per extractor.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Placeholder for a required field no extractor resolved
pub const UNKNOWN: &str = "REQUIRED, BUT UNKNOWN";

/// Represents the value types a document field can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    String(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// True for the required-but-unknown placeholder
    pub fn is_unknown(&self) -> bool {
        self.as_str() == Some(UNKNOWN)
    }

    /// List of plain strings
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Value::String(s.into())).collect())
    }

    fn sorted(&self) -> Value {
        match self {
            Value::List(items) => Value::List(items.iter().map(Value::sorted).collect()),
            Value::Map(map) => {
                let mut map: IndexMap<String, Value> =
                    map.iter().map(|(k, v)| (k.clone(), v.sorted())).collect();
                map.sort_keys();
                Value::Map(map)
            }
            other => other.clone(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
            Value::List(l) => write!(f, "{:?}", l),
            Value::Map(m) => write!(f, "{:?}", m),
        }
    }
}

/// One extractor's output before it is merged
pub type PartialDocument = IndexMap<String, Value>;

/// Single-key partial document
pub fn partial(key: &str, value: impl Into<Value>) -> PartialDocument {
    let mut out = PartialDocument::new();
    out.insert(key.to_string(), value.into());
    out
}

/// Partial document nesting `value` under `parent.key`
pub fn nested(parent: &str, key: &str, value: impl Into<Value>) -> PartialDocument {
    partial(parent, Value::Map(partial(key, value)))
}

/// The accumulating output document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    fields: IndexMap<String, Value>,
}

impl Document {
    /// Sentinel every required key, then lay down the nested `battery` and
    /// `bluetooth` defaults.
    pub fn initialize<S: AsRef<str>>(required_keys: &[S]) -> Self {
        let mut fields: IndexMap<String, Value> = required_keys
            .iter()
            .map(|k| (k.as_ref().to_string(), Value::from(UNKNOWN)))
            .collect();

        let mut battery = IndexMap::new();
        battery.insert("removable".to_string(), Value::from(UNKNOWN));
        battery.insert("capacity".to_string(), Value::from(UNKNOWN));
        fields.insert("battery".to_string(), Value::Map(battery));

        fields.insert(
            "bluetooth".to_string(),
            Value::Map(partial("spec", UNKNOWN)),
        );

        Self { fields }
    }

    /// Shallow union; mapping values merge one level deep.
    ///
    /// Scalars and lists overwrite. Keys absent from `contribution` are left
    /// untouched, so nothing is ever removed.
    pub fn merge(&mut self, contribution: PartialDocument) {
        for (key, value) in contribution {
            match (self.fields.get_mut(&key), value) {
                (Some(Value::Map(existing)), Value::Map(incoming)) => {
                    for (sub_key, sub_value) in incoming {
                        existing.insert(sub_key, sub_value);
                    }
                }
                (_, value) => {
                    self.fields.insert(key, value);
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Lookup one level down, e.g. `("battery", "capacity")`
    pub fn get_nested(&self, key: &str, sub_key: &str) -> Option<&Value> {
        self.get(key)?.as_map()?.get(sub_key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keys still holding the sentinel
    pub fn unresolved(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, v)| v.is_unknown())
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Copy with keys sorted at every level
    pub fn sorted(&self) -> Document {
        let mut fields: IndexMap<String, Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.sorted()))
            .collect();
        fields.sort_keys();
        Document { fields }
    }

    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.fields
    }
}
