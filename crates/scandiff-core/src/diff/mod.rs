//! Scan record comparison engine.
//!
//! Compares N scan records column by column (each column against the one
//! before it) and classifies every field:
//!
//! - **collection fields** element by element as `unchanged` / `new` /
//!   `removed`, matching elements with the field's [`IdentityRule`]
//! - **scalar fields** as unique or not relative to the previous column
//!
//! ## Entry points
//!
//! ```
//! use scandiff_core::diff::{compare_records, Comparator};
//! use scandiff_core::model::ScanRecord;
//!
//! let records: Vec<ScanRecord> = serde_json::from_str(
//!     r#"[{"APP_NAME": "X", "SIZE": "10MB"}, {"APP_NAME": "X", "SIZE": "12MB"}]"#,
//! ).unwrap();
//!
//! // Pure, uncached
//! let result = compare_records(&records, false);
//! assert!(result.get("SIZE").unwrap().is_different());
//!
//! // Memoized
//! let comparator = Comparator::default();
//! let cached = comparator.compare(&records, false);
//! assert_eq!(*cached, result);
//! ```
//!
//! ## Guarantees
//!
//! - **Totality**: comparison never fails; unexpected shapes degrade to
//!   empty collections or plain value comparison.
//! - **Purity**: inputs are never mutated; version sorting returns a new order.
//! - **Determinism**: identical inputs produce identical results.

pub mod cache;
pub mod classify;
pub mod comparator;
pub mod display;
pub mod engine;
pub mod equality;
pub mod field;
pub mod human_summary;
pub mod identity;
pub mod model;
pub mod normalize;
pub mod version;

pub use cache::{CacheStats, ComparisonCache};
pub use comparator::Comparator;
pub use display::{display_rows, DisplayRow};
pub use engine::{compare_records, compare_records_with};
pub use field::compare_field;
pub use human_summary::{render_human_summary, SummaryOptions};
pub use identity::{CollectionField, IdentityRule};
pub use model::{
    ChipColumn, CollectionComparison, DiffStatus, FieldComparison, RecordComparison,
    ScalarColumn, ScalarComparison,
};
