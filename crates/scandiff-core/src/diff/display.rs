//! Row selection for presenting a comparison.

use crate::diff::model::{FieldComparison, RecordComparison};
use crate::model::fields::DISPLAY_ORDER;

/// One presentable row of a comparison grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRow<'a> {
    pub field: &'static str,
    pub comparison: &'a FieldComparison,
}

/// Rows in display order, skipping fields absent from `result`.
///
/// With `hide_unchanged`, rows whose field does not differ across columns
/// are dropped as well.
pub fn display_rows(result: &RecordComparison, hide_unchanged: bool) -> Vec<DisplayRow<'_>> {
    DISPLAY_ORDER
        .iter()
        .copied()
        .filter_map(|field| {
            result.get(field).map(|comparison| DisplayRow {
                field,
                comparison,
            })
        })
        .filter(|row| !hide_unchanged || row.comparison.is_different())
        .collect()
}
