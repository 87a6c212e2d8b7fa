use serde_json::Value;

use crate::diff::identity::CollectionField;
use crate::errors::{json_type_name, Result, ScanDiffError};
use crate::model::{ScanRecord, VERSION_NAME};

/// Validate a JSON document holding a list of scan records
///
/// # Errors
/// `InvalidInput` if `document` is not an array; otherwise see
/// [`validate_records`].
pub fn parse_records(document: &Value) -> Result<Vec<ScanRecord>> {
    match document {
        Value::Array(items) => validate_records(items),
        other => Err(ScanDiffError::NotARecordList {
            found: json_type_name(other).to_string(),
        }
        .into()),
    }
}

/// Validate raw records before they reach the comparison engine
///
/// Rejects only input that is clearly malformed:
///
/// 1. A record that is not a JSON object
/// 2. A collection field holding a boolean or number (lists, delimited
///    strings, objects and null are all accepted)
/// 3. A `VERSION_NAME` that is an array, object or boolean
///
/// Empty records, missing fields and empty collections pass unchanged.
///
/// # Errors
/// Returns the first violation as `InvalidRecord`, carrying the record index
/// and, where applicable, the field name.
pub fn validate_records(values: &[Value]) -> Result<Vec<ScanRecord>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| validate_record(index, value).map_err(Into::into))
        .collect()
}

/// Validate a single record at position `index`
pub fn validate_record(index: usize, value: &Value) -> std::result::Result<ScanRecord, ScanDiffError> {
    let fields = value.as_object().ok_or_else(|| ScanDiffError::RecordNotObject {
        index,
        found: json_type_name(value).to_string(),
    })?;

    for (name, field_value) in fields {
        if CollectionField::from_field_name(name).is_some()
            && matches!(field_value, Value::Bool(_) | Value::Number(_))
        {
            return Err(ScanDiffError::MalformedCollectionField {
                index,
                field: name.clone(),
                found: json_type_name(field_value).to_string(),
            });
        }
    }

    if let Some(version) = fields.get(VERSION_NAME) {
        if matches!(version, Value::Array(_) | Value::Object(_) | Value::Bool(_)) {
            return Err(ScanDiffError::MalformedVersion {
                index,
                found: json_type_name(version).to_string(),
            });
        }
    }

    Ok(ScanRecord::new(fields.clone()))
}
