//! Comparator configuration.
//!
//! Loaded from TOML; every key is optional.
//!
//! ```toml
//! scalar_equality = "structural"
//! cache_capacity = 256
//! sort_by_version_first = true
//! ```

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::Path;

use crate::errors::{Result, ScanDiffError};

/// How scalar (non-collection) columns are compared with their predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarEquality {
    /// Key order inside objects matters; numbers compare by value
    #[default]
    OrderSensitive,
    /// Key order inside objects is ignored; numbers compare by value
    Structural,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    pub scalar_equality: ScalarEquality,
    /// Maximum cached comparisons (least recently used evicted first);
    /// unbounded when absent
    pub cache_capacity: Option<NonZeroUsize>,
    /// Default ordering mode for callers that do not choose explicitly
    pub sort_by_version_first: bool,
}

impl CompareConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the text is not valid TOML, contains unknown keys,
    /// or a value is out of range (e.g. `cache_capacity = 0`).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            crate::errors::ExError::from(ScanDiffError::InvalidConfig {
                reason: e.to_string(),
            })
            .with_op("load_config")
        })
    }

    /// Read and parse a TOML configuration file
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `InvalidConfig` if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            crate::errors::ExError::from(ScanDiffError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
            .with_op("load_config")
        })?;
        Self::from_toml_str(&text)
    }
}
