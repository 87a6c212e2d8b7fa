//! Record comparator.
//!
//! The core entry point is [`compare_records`], which compares every field of
//! N scan records column by column and produces a [`RecordComparison`].

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;
use std::time::Instant;

use crate::config::ScalarEquality;
use crate::diff::field::compare_field;
use crate::diff::model::{FieldComparison, RecordComparison};
use crate::diff::version::sort_by_version;
use crate::model::ScanRecord;
use crate::{log_op_end, log_op_start};

/// Compare `records` column by column using order-sensitive scalar equality.
///
/// See [`compare_records_with`].
pub fn compare_records(records: &[ScanRecord], sort_by_version_first: bool) -> RecordComparison {
    compare_records_with(records, sort_by_version_first, ScalarEquality::default())
}

/// Compare `records` column by column.
///
/// When `sort_by_version_first` is set the columns are ordered by ascending
/// `VERSION_NAME` first; otherwise the caller's order is used as-is. The
/// result covers the union of field names across all records in first-seen
/// order; a record lacking a field contributes an absent value at its column.
///
/// Never fails: zero records yield an empty result.
pub fn compare_records_with(
    records: &[ScanRecord],
    sort_by_version_first: bool,
    equality: ScalarEquality,
) -> RecordComparison {
    let start = Instant::now();
    log_op_start!(
        "compare_records",
        columns = records.len(),
        sort_by_version_first = sort_by_version_first
    );

    let ordered: Vec<&ScanRecord> = if sort_by_version_first {
        sort_by_version(records)
    } else {
        records.iter().collect()
    };

    let mut fields: IndexMap<String, FieldComparison> = IndexMap::new();
    for name in field_union(&ordered) {
        let columns: Vec<Option<&Value>> = ordered.iter().map(|r| r.get(name)).collect();
        let comparison = compare_field(name, &columns, equality);
        tracing::debug!(
            field = name,
            collection = matches!(comparison, FieldComparison::Collection(_)),
            is_different = comparison.is_different(),
            "compared field"
        );
        fields.insert(name.to_string(), comparison);
    }

    let result = RecordComparison::from_fields(fields);
    log_op_end!(
        "compare_records",
        duration_ms = start.elapsed().as_millis() as u64,
        fields = result.len(),
        differing = result.iter().filter(|(_, f)| f.is_different()).count()
    );
    result
}

/// Field names across all records, first-seen order, left to right
fn field_union<'a>(records: &[&'a ScanRecord]) -> Vec<&'a str> {
    let mut seen: IndexSet<&'a str> = IndexSet::new();
    for record in records.iter().copied() {
        seen.extend(record.field_names());
    }
    seen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(v: Value) -> Vec<ScanRecord> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_union_is_first_seen_order() {
        let input = records(json!([
            {"APP_NAME": "X", "SIZE": "1MB"},
            {"SHA256": "abc", "APP_NAME": "X", "EXTRA": 1}
        ]));
        let result = compare_records(&input, false);
        let names: Vec<&str> = result.field_names().collect();
        assert_eq!(names, vec!["APP_NAME", "SIZE", "SHA256", "EXTRA"]);
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let result = compare_records(&[], true);
        assert!(result.is_empty());
        assert_eq!(result.column_count(), 0);
    }

    #[test]
    fn test_single_column_has_no_differences() {
        let input = records(json!([{"APP_NAME": "X", "DOMAINS": [{"domain": "a.com"}]}]));
        let result = compare_records(&input, false);
        assert!(!result.has_differences());
        assert_eq!(result.column_count(), 1);
    }

    #[test]
    fn test_sorting_does_not_touch_caller_order() {
        let input = records(json!([
            {"VERSION_NAME": "2.0"},
            {"VERSION_NAME": "1.0"}
        ]));
        let result = compare_records(&input, true);
        assert_eq!(input[0].get("VERSION_NAME"), Some(&json!("2.0")));

        let versions = result.get("VERSION_NAME").and_then(|f| f.as_scalar()).unwrap();
        assert_eq!(versions.values[0].value, Some(json!("1.0")));
        assert_eq!(versions.values[1].value, Some(json!("2.0")));
    }
}
