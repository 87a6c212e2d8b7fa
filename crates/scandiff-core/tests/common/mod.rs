use scandiff_core::diff::{ChipColumn, FieldComparison, RecordComparison, ScalarComparison};
use scandiff_core::ScanRecord;
use serde_json::Value;

/// Build scan records from a JSON array literal
#[allow(dead_code)]
pub fn records(value: Value) -> Vec<ScanRecord> {
    serde_json::from_value(value).expect("test records must be a JSON array of objects")
}

/// Collection column `column` of `field`
#[allow(dead_code)]
pub fn chip_column<'a>(result: &'a RecordComparison, field: &str, column: usize) -> &'a ChipColumn {
    let collection = result
        .get(field)
        .and_then(FieldComparison::as_collection)
        .unwrap_or_else(|| panic!("{field} should be a collection field"));
    &collection.values[column]
}

/// Scalar comparison of `field`
#[allow(dead_code)]
pub fn scalar<'a>(result: &'a RecordComparison, field: &str) -> &'a ScalarComparison {
    result
        .get(field)
        .and_then(FieldComparison::as_scalar)
        .unwrap_or_else(|| panic!("{field} should be a scalar field"))
}
