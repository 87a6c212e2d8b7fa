//! Field comparator: one field across N columns.

use serde_json::Value;

use crate::config::ScalarEquality;
use crate::diff::classify::{classify, find_removed};
use crate::diff::equality::json_equal;
use crate::diff::identity::{CollectionField, IdentityRule};
use crate::diff::model::{
    ChipColumn, CollectionComparison, DiffStatus, FieldComparison, ScalarColumn,
    ScalarComparison,
};
use crate::diff::normalize::normalize;

/// Compare one field across columns.
///
/// `columns[i]` is the raw value in column *i* (`None` when that record lacks
/// the field). Known collection fields are diffed element by element, every
/// other field by value. Each column is compared with the one before it;
/// column 0 is the baseline.
pub fn compare_field(
    field: &str,
    columns: &[Option<&Value>],
    equality: ScalarEquality,
) -> FieldComparison {
    match CollectionField::from_field_name(field) {
        Some(kind) => FieldComparison::Collection(compare_collection(kind.identity(), columns)),
        None => FieldComparison::Scalar(compare_scalar(columns, equality)),
    }
}

/// Collection path: classify each column's elements against the previous
/// column's, then append the previous column's removed elements.
pub fn compare_collection(rule: IdentityRule, columns: &[Option<&Value>]) -> CollectionComparison {
    let normalized: Vec<Vec<Value>> = columns.iter().map(|raw| normalize(*raw)).collect();

    let values: Vec<ChipColumn> = normalized
        .iter()
        .enumerate()
        .map(|(index, current)| match index.checked_sub(1) {
            None => ChipColumn {
                value: current.clone(),
                chip_status: vec![DiffStatus::Unchanged; current.len()],
            },
            Some(prev_index) => {
                let previous = &normalized[prev_index];
                let removed = find_removed(rule, previous, current);

                let mut value = Vec::with_capacity(current.len() + removed.len());
                let mut chip_status = Vec::with_capacity(current.len() + removed.len());
                for element in current {
                    chip_status.push(classify(rule, element, previous));
                    value.push(element.clone());
                }
                for element in removed {
                    chip_status.push(DiffStatus::Removed);
                    value.push(element.clone());
                }
                ChipColumn { value, chip_status }
            }
        })
        .collect();

    let is_different = values
        .iter()
        .any(|column| column.chip_status.iter().any(|s| *s != DiffStatus::Unchanged));

    CollectionComparison {
        is_different,
        values,
    }
}

/// Scalar path: a column is unique when its value differs from the previous
/// column's under `equality`. An absent value differs from any present one,
/// including `null`.
pub fn compare_scalar(columns: &[Option<&Value>], equality: ScalarEquality) -> ScalarComparison {
    let values: Vec<ScalarColumn> = columns
        .iter()
        .enumerate()
        .map(|(index, current)| ScalarColumn {
            value: current.cloned(),
            is_unique: index
                .checked_sub(1)
                .map(|prev| !scalars_equal(columns[prev], *current, equality))
                .unwrap_or(false),
        })
        .collect();

    ScalarComparison {
        is_different: values.iter().any(|c| c.is_unique),
        values,
    }
}

fn scalars_equal(a: Option<&Value>, b: Option<&Value>, equality: ScalarEquality) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => json_equal(a, b, equality),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cols(values: &[Value]) -> Vec<Option<&Value>> {
        values.iter().map(Some).collect()
    }

    #[test]
    fn test_baseline_column_is_all_unchanged() {
        let raw = [json!([{"domain": "a.com"}, {"domain": "b.com"}])];
        let result = compare_collection(IdentityRule::Key("domain"), &cols(&raw));
        assert_eq!(
            result.values[0].chip_status,
            vec![DiffStatus::Unchanged, DiffStatus::Unchanged]
        );
        assert!(!result.is_different);
    }

    #[test]
    fn test_removed_elements_follow_current_elements() {
        let raw = [json!("A, B, C"), json!("D, A")];
        let result = compare_collection(IdentityRule::Value, &cols(&raw));
        let column = &result.values[1];
        assert_eq!(
            column.value,
            vec![json!("D"), json!("A"), json!("B"), json!("C")]
        );
        assert_eq!(
            column.chip_status,
            vec![
                DiffStatus::New,
                DiffStatus::Unchanged,
                DiffStatus::Removed,
                DiffStatus::Removed
            ]
        );
        assert!(result.is_different);
    }

    #[test]
    fn test_each_column_diffs_against_its_predecessor() {
        // a.com disappears in column 1 and comes back in column 2: column 2
        // sees it as new relative to column 1, not unchanged relative to 0.
        let raw = [
            json!([{"domain": "a.com"}]),
            json!([]),
            json!([{"domain": "a.com"}]),
        ];
        let result = compare_collection(IdentityRule::Key("domain"), &cols(&raw));
        assert_eq!(result.values[1].chip_status, vec![DiffStatus::Removed]);
        assert_eq!(result.values[2].chip_status, vec![DiffStatus::New]);
    }

    #[test]
    fn test_missing_collection_field_is_empty() {
        let present = json!(["CAMERA"]);
        let result = compare_collection(IdentityRule::Value, &[None, Some(&present)]);
        assert!(result.values[0].value.is_empty());
        assert_eq!(result.values[1].chip_status, vec![DiffStatus::New]);
    }

    #[test]
    fn test_scalar_uniqueness_is_adjacent() {
        let raw = [json!("X"), json!("Y"), json!("Y")];
        let result = compare_scalar(&cols(&raw), ScalarEquality::OrderSensitive);
        let flags: Vec<bool> = result.values.iter().map(|c| c.is_unique).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert!(result.is_different);
    }

    #[test]
    fn test_absent_differs_from_null() {
        let null = Value::Null;
        let result = compare_scalar(&[Some(&null), None], ScalarEquality::Structural);
        assert!(result.values[1].is_unique);
        assert_eq!(result.values[1].value, None);
    }

    #[test]
    fn test_key_order_matters_only_when_order_sensitive() {
        let a: Value = serde_json::from_str(r#"{"high": 1, "info": 2}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"info": 2, "high": 1}"#).unwrap();
        let columns = [Some(&a), Some(&b)];

        assert!(compare_scalar(&columns, ScalarEquality::OrderSensitive).is_different);
        assert!(!compare_scalar(&columns, ScalarEquality::Structural).is_different);
    }

    #[test]
    fn test_integer_and_float_forms_are_not_unique() {
        let int: Value = serde_json::from_str("1").unwrap();
        let float: Value = serde_json::from_str("1.0").unwrap();
        let columns = [Some(&int), Some(&float)];

        for mode in [ScalarEquality::OrderSensitive, ScalarEquality::Structural] {
            let result = compare_scalar(&columns, mode);
            assert!(!result.values[1].is_unique, "{mode:?}");
            assert!(!result.is_different);
        }
    }

    #[test]
    fn test_compare_field_dispatches_on_field_kind() {
        let raw = [json!("A, B"), json!("A")];
        assert!(matches!(
            compare_field("OTHER_ABUSED_PERMISSIONS", &cols(&raw), ScalarEquality::default()),
            FieldComparison::Collection(_)
        ));
        assert!(matches!(
            compare_field("NETWORK_FINDINGS", &cols(&raw), ScalarEquality::default()),
            FieldComparison::Scalar(_)
        ));
    }
}
