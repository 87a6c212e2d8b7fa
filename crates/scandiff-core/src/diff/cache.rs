//! Result cache for record comparisons.
//!
//! Keys are the serialized comparator arguments; values are shared
//! (`Arc`) so a hit hands back the very result computed earlier.
//! A single lock guards the map and is held only for the map operation.

use indexmap::IndexMap;
use parking_lot::Mutex;
use serde::Serialize;
use sha2::{Digest as _, Sha256};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::diff::model::RecordComparison;
use crate::model::ScanRecord;

/// Counters describing cache behaviour since creation (or the last clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

#[derive(Debug, Default)]
pub struct ComparisonCache {
    entries: Mutex<IndexMap<String, Arc<RecordComparison>>>,
    capacity: Option<NonZeroUsize>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl ComparisonCache {
    /// Unbounded cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `capacity` entries when given, evicting the
    /// least recently used entry first
    pub fn with_capacity(capacity: Option<NonZeroUsize>) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    /// Look up a cached result, counting the hit or miss
    pub fn get(&self, key: &str) -> Option<Arc<RecordComparison>> {
        let mut entries = self.entries.lock();
        let found = match self.capacity {
            // Bounded: move the entry to the back to mark it most recent
            Some(_) => {
                let value = entries.shift_remove(key);
                if let Some(v) = &value {
                    entries.insert(key.to_string(), Arc::clone(v));
                }
                value
            }
            None => entries.get(key).cloned(),
        };
        drop(entries);

        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Store a result, evicting the oldest entries beyond capacity.
    ///
    /// Returns the number of entries evicted.
    pub fn set(&self, key: String, value: Arc<RecordComparison>) -> usize {
        let mut entries = self.entries.lock();
        entries.shift_remove(&key);
        entries.insert(key, value);

        let mut evicted = 0;
        if let Some(capacity) = self.capacity {
            while entries.len() > capacity.get() {
                entries.shift_remove_index(0);
                evicted += 1;
            }
        }
        drop(entries);

        self.evictions.fetch_add(evicted as u64, Ordering::Relaxed);
        evicted
    }

    /// Drop every entry and reset the counters
    pub fn clear(&self) {
        self.entries.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
    }

    pub fn size(&self) -> usize {
        self.entries.lock().len()
    }

    /// Snapshot of all entries, least recently used first
    pub fn entries(&self) -> Vec<(String, Arc<RecordComparison>)> {
        self.entries
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), Arc::clone(v)))
            .collect()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.size(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

/// Cache key for a comparator call: `[records, sort_by_version_first]` as JSON.
///
/// Column order and field order are part of the key.
///
/// # Errors
///
/// Propagates serializer failures (not expected for JSON-derived records).
pub fn cache_key(
    records: &[ScanRecord],
    sort_by_version_first: bool,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&(records, sort_by_version_first))
}

/// Short digest of a cache key for log fields
pub fn key_digest(key: &str) -> String {
    let digest = hex::encode(Sha256::digest(key.as_bytes()));
    digest[..12].to_string()
}
