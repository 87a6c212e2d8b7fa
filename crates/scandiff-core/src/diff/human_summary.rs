//! Human-readable summary renderer for record comparisons.

use crate::diff::display::display_rows;
use crate::diff::identity::IdentityRule;
use crate::diff::model::{DiffStatus, FieldComparison, RecordComparison};
use crate::model::record::display_text;

/// Rendering switches for [`render_human_summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryOptions {
    /// Leave out rows that are identical in every column
    pub hide_unchanged: bool,
}

/// Render a Markdown summary of a [`RecordComparison`].
///
/// Scalar columns that differ from their predecessor are marked with `*`;
/// collection elements are prefixed `+` (new) or `-` (removed).
/// Informational only; the structured result is the contract.
pub fn render_human_summary(result: &RecordComparison, options: SummaryOptions) -> String {
    let mut out = String::new();
    out.push_str("## Scan Comparison\n\n");

    let labels = result.column_labels();
    if labels.is_empty() {
        out.push_str("_Nothing to compare._\n");
        return out;
    }

    let changed = result.iter().filter(|(_, f)| f.is_different()).count();
    out.push_str(&format!(
        "**Columns**: {}  \n**Changed fields**: {} of {}\n\n",
        labels.join(" | "),
        changed,
        result.len()
    ));

    let rows = display_rows(result, options.hide_unchanged);
    if rows.is_empty() {
        out.push_str("_No differences detected._\n");
        return out;
    }

    for row in rows {
        let marker = if row.comparison.is_different() {
            " (changed)"
        } else {
            ""
        };
        out.push_str(&format!("### {}{}\n\n", row.field, marker));

        match row.comparison {
            FieldComparison::Scalar(scalar) => {
                for (label, column) in labels.iter().zip(&scalar.values) {
                    let unique = if column.is_unique { " *" } else { "" };
                    out.push_str(&format!(
                        "- {}: {}{}\n",
                        label,
                        display_text(column.value.as_ref()),
                        unique
                    ));
                }
            }
            FieldComparison::Collection(collection) => {
                let rule = IdentityRule::for_field(row.field);
                for (label, column) in labels.iter().zip(&collection.values) {
                    let chips: Vec<String> = column
                        .chips()
                        .map(|(element, status)| {
                            let prefix = match status {
                                DiffStatus::New => "+",
                                DiffStatus::Removed => "-",
                                DiffStatus::Unchanged | DiffStatus::Unique => "",
                            };
                            format!("{}{}", prefix, rule.label(element))
                        })
                        .collect();
                    let text = if chips.is_empty() {
                        "(none)".to_string()
                    } else {
                        chips.join(", ")
                    };
                    out.push_str(&format!("- {}: {}\n", label, text));
                }
            }
        }
        out.push('\n');
    }

    out
}
