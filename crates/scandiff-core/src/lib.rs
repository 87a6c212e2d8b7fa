//! scandiff core - comparison engine for mobile app security-scan reports
//!
//! This crate provides:
//! - The scan record model and a validation boundary for raw JSON records
//! - The field comparison and diff-classification engine (`diff`)
//! - A memoizing comparator with an inspectable, optionally bounded cache
//! - Configuration, the canonical error facility and the logging facility

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Used by the logging macros
#[doc(hidden)]
pub use scandiff_core_types;

// Re-export commonly used types
pub use config::{CompareConfig, ScalarEquality};
pub use diff::{compare_records, Comparator, RecordComparison};
pub use errors::{ExError, ExErrorKind, Result, ScanDiffError};
pub use model::ScanRecord;
