//! Scan record model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One normalized scan report: field name → raw JSON value.
///
/// Field order is the order the upstream normalizer produced (serde_json is
/// built with `preserve_order`), which drives the first-seen field union.
/// A record is never mutated once handed to the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanRecord(Map<String, Value>);

impl ScanRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw value of a field, `None` when the record does not carry it
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ScanRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Plain-text rendering of a raw value for labels and summaries
pub(crate) fn display_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "N/A".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
