//! Comparison output types.
//!
//! Serialized field names follow the shape the rendering layer consumes
//! (`isDifferent`, `values`, `value`, `chipStatus`, `isUnique`).
//! Every value here is built fresh per comparison and never mutated after.
//! Results are output only: `ScalarColumn` distinguishes an absent value
//! (omitted) from a present `null`, which a JSON reader could not recover.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::fields::{APP_NAME, VERSION_NAME};
use crate::model::record::display_text;

/// Classification tag attached to a collection element or a scalar column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    /// Element (or value) also present in the previous column
    Unchanged,
    /// Element absent from the previous column
    New,
    /// Element present in the previous column but gone from this one
    Removed,
    /// Scalar value differs from the previous column
    Unique,
}

/// One column of a collection field.
///
/// `value` lists the column's current elements followed by the elements
/// removed relative to the previous column; `chip_status` is parallel to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipColumn {
    pub value: Vec<Value>,
    pub chip_status: Vec<DiffStatus>,
}

impl ChipColumn {
    /// Elements paired with their status, in display order
    pub fn chips(&self) -> impl Iterator<Item = (&Value, DiffStatus)> {
        self.value.iter().zip(self.chip_status.iter().copied())
    }

    /// Number of elements carrying `status`
    pub fn count(&self, status: DiffStatus) -> usize {
        self.chip_status.iter().filter(|s| **s == status).count()
    }
}

/// One column of a scalar field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarColumn {
    /// Raw value; `None` when the record does not carry the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub is_unique: bool,
}

impl ScalarColumn {
    pub fn status(&self) -> DiffStatus {
        if self.is_unique {
            DiffStatus::Unique
        } else {
            DiffStatus::Unchanged
        }
    }
}

/// Per-column results of a collection field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionComparison {
    pub is_different: bool,
    pub values: Vec<ChipColumn>,
}

/// Per-column results of a scalar field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarComparison {
    pub is_different: bool,
    pub values: Vec<ScalarColumn>,
}

/// Comparison result of one field across all columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldComparison {
    Collection(CollectionComparison),
    Scalar(ScalarComparison),
}

impl FieldComparison {
    pub fn is_different(&self) -> bool {
        match self {
            FieldComparison::Collection(c) => c.is_different,
            FieldComparison::Scalar(s) => s.is_different,
        }
    }

    pub fn column_count(&self) -> usize {
        match self {
            FieldComparison::Collection(c) => c.values.len(),
            FieldComparison::Scalar(s) => s.values.len(),
        }
    }

    pub fn as_collection(&self) -> Option<&CollectionComparison> {
        match self {
            FieldComparison::Collection(c) => Some(c),
            FieldComparison::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarComparison> {
        match self {
            FieldComparison::Scalar(s) => Some(s),
            FieldComparison::Collection(_) => None,
        }
    }
}

/// Comparison result for a whole set of records: field name → result.
///
/// Covers the union of field names across all input records, in first-seen
/// order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RecordComparison {
    fields: IndexMap<String, FieldComparison>,
}

impl RecordComparison {
    pub(crate) fn from_fields(fields: IndexMap<String, FieldComparison>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&FieldComparison> {
        self.fields.get(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldComparison)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of compared columns
    pub fn column_count(&self) -> usize {
        self.fields
            .values()
            .map(FieldComparison::column_count)
            .max()
            .unwrap_or(0)
    }

    /// True if any field differs between any two adjacent columns
    pub fn has_differences(&self) -> bool {
        self.fields.values().any(FieldComparison::is_different)
    }

    /// Column headings (`"{APP_NAME} {VERSION_NAME}"`) in compared order
    pub fn column_labels(&self) -> Vec<String> {
        let scalar_at = |field: &str, column: usize| -> Option<&Value> {
            self.get(field)
                .and_then(FieldComparison::as_scalar)
                .and_then(|s| s.values.get(column))
                .and_then(|c| c.value.as_ref())
        };
        (0..self.column_count())
            .map(|column| {
                format!(
                    "{} {}",
                    display_text(scalar_at(APP_NAME, column)),
                    display_text(scalar_at(VERSION_NAME, column))
                )
            })
            .collect()
    }
}
