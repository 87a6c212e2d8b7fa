/// Scenario 3: Unchanged permission
///
/// Identical permission lists produce no differences in any column.
mod common;

use common::{chip_column, records};
use scandiff_core::compare_records;
use scandiff_core::diff::DiffStatus;
use serde_json::json;

#[test]
fn test_scenario_03_same_permission_is_unchanged() {
    // GIVEN the same permission in both scans
    let input = records(json!([
        {"PERMISSIONS": [{"permission": "CAMERA"}]},
        {"PERMISSIONS": [{"permission": "CAMERA"}]}
    ]));

    // WHEN comparing
    let result = compare_records(&input, false);

    // THEN column 1 has one unchanged chip and the field is not different
    assert_eq!(
        chip_column(&result, "PERMISSIONS", 1).chip_status,
        vec![DiffStatus::Unchanged]
    );
    assert!(!result.get("PERMISSIONS").unwrap().is_different());
}

#[test]
fn test_scenario_03_status_change_keeps_permission_unchanged() {
    // GIVEN a permission whose status text changes between scans
    let input = records(json!([
        {"PERMISSIONS": [{"permission": "CAMERA", "status": "dangerous"}]},
        {"PERMISSIONS": [{"permission": "CAMERA", "status": "normal"}]}
    ]));

    // WHEN comparing
    let result = compare_records(&input, false);

    // THEN identity is by permission name only
    assert_eq!(
        chip_column(&result, "PERMISSIONS", 1).chip_status,
        vec![DiffStatus::Unchanged]
    );
}

#[test]
fn test_scenario_03_three_columns_each_against_previous() {
    // GIVEN a permission dropped in the middle scan and restored later
    let input = records(json!([
        {"PERMISSIONS": [{"permission": "CAMERA"}]},
        {"PERMISSIONS": []},
        {"PERMISSIONS": [{"permission": "CAMERA"}]}
    ]));

    // WHEN comparing
    let result = compare_records(&input, false);

    // THEN it is removed in column 1 and new again in column 2
    assert_eq!(
        chip_column(&result, "PERMISSIONS", 1).chip_status,
        vec![DiffStatus::Removed]
    );
    assert_eq!(
        chip_column(&result, "PERMISSIONS", 2).chip_status,
        vec![DiffStatus::New]
    );
}
