//! Collection normalizer: raw field value → ordered element sequence.

use serde_json::Value;

/// Separator used by delimited-string collection fields
pub const DELIMITER: &str = ", ";

/// Coerce a raw collection value into an ordered sequence of elements.
///
/// - sequence → elements as-is
/// - string → split on `", "` (an empty string yields no elements)
/// - keyed mapping → its values in insertion order
/// - anything else, including an absent field → empty
pub fn normalize(raw: Option<&Value>) -> Vec<Value> {
    match raw {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::String(s)) if s.is_empty() => Vec::new(),
        Some(Value::String(s)) => s
            .split(DELIMITER)
            .map(|part| Value::String(part.to_string()))
            .collect(),
        Some(Value::Object(map)) => map.values().cloned().collect(),
        Some(Value::Null | Value::Bool(_) | Value::Number(_)) | None => Vec::new(),
    }
}
