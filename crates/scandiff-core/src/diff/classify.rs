//! Element classifier.
//!
//! Decisions are made per element and independently: one previous element
//! can justify any number of current elements as unchanged.

use serde_json::Value;

use crate::diff::identity::IdentityRule;
use crate::diff::model::DiffStatus;

/// `Unchanged` if `element` matches some element of the previous column,
/// `New` otherwise.
pub fn classify(rule: IdentityRule, element: &Value, previous: &[Value]) -> DiffStatus {
    if previous.iter().any(|p| rule.same_entity(p, element)) {
        DiffStatus::Unchanged
    } else {
        DiffStatus::New
    }
}

/// Elements of `previous` with no match in `current`, in `previous` order.
pub fn find_removed<'a>(
    rule: IdentityRule,
    previous: &'a [Value],
    current: &[Value],
) -> Vec<&'a Value> {
    previous
        .iter()
        .filter(|p| !current.iter().any(|c| rule.same_entity(p, c)))
        .collect()
}
