//! Identity rules for collection fields.
//!
//! Each known collection field decides "same entity across columns" either by
//! a named key inside the element or by full-value equality. Adding a new
//! collection field means one new variant plus its arms below.

use serde_json::Value;

use crate::config::ScalarEquality;
use crate::diff::equality::json_equal;

use crate::model::fields::{
    CODE_ANALYSIS_CWE, CODE_ANALYSIS_MASVS, CODE_ANALYSIS_OWASP, DOMAINS,
    OTHER_ABUSED_PERMISSIONS, PERMISSIONS, TOP_MALWARE_PERMISSIONS, TRACKER_DETAILS,
};

/// Fields whose values are diffed element by element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionField {
    TopMalwarePermissions,
    Permissions,
    OtherAbusedPermissions,
    TrackerDetails,
    Domains,
    CodeAnalysisMasvs,
    CodeAnalysisCwe,
    CodeAnalysisOwasp,
}

impl CollectionField {
    pub const ALL: [CollectionField; 8] = [
        CollectionField::TopMalwarePermissions,
        CollectionField::Permissions,
        CollectionField::OtherAbusedPermissions,
        CollectionField::TrackerDetails,
        CollectionField::Domains,
        CollectionField::CodeAnalysisMasvs,
        CollectionField::CodeAnalysisCwe,
        CollectionField::CodeAnalysisOwasp,
    ];

    /// Resolve a record field name; `None` means the field is a scalar field
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.field_name() == name)
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            CollectionField::TopMalwarePermissions => TOP_MALWARE_PERMISSIONS,
            CollectionField::Permissions => PERMISSIONS,
            CollectionField::OtherAbusedPermissions => OTHER_ABUSED_PERMISSIONS,
            CollectionField::TrackerDetails => TRACKER_DETAILS,
            CollectionField::Domains => DOMAINS,
            CollectionField::CodeAnalysisMasvs => CODE_ANALYSIS_MASVS,
            CollectionField::CodeAnalysisCwe => CODE_ANALYSIS_CWE,
            CollectionField::CodeAnalysisOwasp => CODE_ANALYSIS_OWASP,
        }
    }

    pub fn identity(&self) -> IdentityRule {
        match self {
            CollectionField::Domains => IdentityRule::Key("domain"),
            CollectionField::TrackerDetails => IdentityRule::Key("name"),
            CollectionField::Permissions => IdentityRule::Key("permission"),
            CollectionField::CodeAnalysisMasvs
            | CollectionField::CodeAnalysisCwe
            | CollectionField::CodeAnalysisOwasp => IdentityRule::Key("issueType"),
            // Delimited-string fields: elements are plain permission names
            CollectionField::TopMalwarePermissions | CollectionField::OtherAbusedPermissions => {
                IdentityRule::Value
            }
        }
    }
}

/// Predicate deciding whether two elements are the same underlying entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRule {
    /// Equal when the named member is equal
    Key(&'static str),
    /// Equal when the whole values are structurally equal
    Value,
}

impl IdentityRule {
    /// Rule for an arbitrary field name, defaulting to value equality
    pub fn for_field(name: &str) -> Self {
        CollectionField::from_field_name(name)
            .map(|f| f.identity())
            .unwrap_or(IdentityRule::Value)
    }

    /// Whether `a` and `b` represent the same entity.
    ///
    /// Under a key rule, elements that both lack the key (e.g. bare strings
    /// in a keyed field) fall back to value equality; an element with the
    /// key never matches one without it.
    pub fn same_entity(&self, a: &Value, b: &Value) -> bool {
        match self {
            IdentityRule::Key(key) => match (a.get(key), b.get(key)) {
                (Some(x), Some(y)) => json_equal(x, y, ScalarEquality::Structural),
                (None, None) => json_equal(a, b, ScalarEquality::Structural),
                _ => false,
            },
            IdentityRule::Value => json_equal(a, b, ScalarEquality::Structural),
        }
    }

    /// Short text naming `element` under this rule, used in summaries
    pub fn label(&self, element: &Value) -> String {
        let keyed = match self {
            IdentityRule::Key(key) => element.get(key),
            IdentityRule::Value => None,
        };
        match keyed.unwrap_or(element) {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
