//! Dotted numeric version ordering (`"1.2.10"` after `"1.2.9"`).

use serde_json::Value;
use std::cmp::Ordering;

use crate::model::{ScanRecord, VERSION_NAME};

/// Parse a version value into numeric segments.
///
/// Segments that are not non-negative integers count as 0, as does a
/// missing or non-textual version.
pub fn parse_version(raw: Option<&Value>) -> Vec<u64> {
    let text = match raw {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    text.split('.')
        .map(|segment| segment.trim().parse::<u64>().unwrap_or(0))
        .collect()
}

/// Compare segment lists, treating missing trailing segments as 0
/// (so `1.0` == `1`).
pub fn compare_versions(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Records ordered by ascending `VERSION_NAME`.
///
/// Stable (equal versions keep their input order) and non-mutating: the
/// caller's slice is left as it was.
pub fn sort_by_version(records: &[ScanRecord]) -> Vec<&ScanRecord> {
    let mut keyed: Vec<(Vec<u64>, &ScanRecord)> = records
        .iter()
        .map(|r| (parse_version(r.get(VERSION_NAME)), r))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_versions(a, b));
    keyed.into_iter().map(|(_, r)| r).collect()
}
