//! Memoizing comparator.
//!
//! Owns a [`ComparisonCache`] and consults it around every record
//! comparison. Share one `Comparator` (e.g. behind an `Arc`) to share its
//! cache; the cache lock is never held while a comparison runs, so two
//! threads missing on the same key may both compute and the later insert wins.

use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use scandiff_core_types::RequestId;

use crate::config::{CompareConfig, ScalarEquality};
use crate::diff::cache::{cache_key, key_digest, ComparisonCache};
use crate::diff::engine::compare_records_with;
use crate::diff::model::RecordComparison;
use crate::errors::Result;
use crate::model::ScanRecord;
use crate::rules::validation::validate_records;
use crate::{log_cache_event, log_op_end, log_op_error, log_op_start};

#[derive(Debug, Default)]
pub struct Comparator {
    cache: ComparisonCache,
    scalar_equality: ScalarEquality,
}

impl Comparator {
    pub fn new(config: &CompareConfig) -> Self {
        Self {
            cache: ComparisonCache::with_capacity(config.cache_capacity),
            scalar_equality: config.scalar_equality,
        }
    }

    pub fn scalar_equality(&self) -> ScalarEquality {
        self.scalar_equality
    }

    /// The result cache, for inspection (`entries`, `size`, `stats`) and `clear`
    pub fn cache(&self) -> &ComparisonCache {
        &self.cache
    }

    /// Compare `records`, reusing a cached result for identical arguments.
    ///
    /// A hit returns the same `Arc` that was produced on the first call
    /// without re-running any field comparison.
    pub fn compare(
        &self,
        records: &[ScanRecord],
        sort_by_version_first: bool,
    ) -> Arc<RecordComparison> {
        self.compare_as(&RequestId::new(), records, sort_by_version_first)
    }

    /// Validate raw JSON records, then [`compare`](Self::compare) them.
    ///
    /// # Errors
    /// `InvalidRecord` when a record fails validation, tagged with the
    /// request id of this call; nothing is cached then.
    pub fn compare_json(
        &self,
        values: &[Value],
        sort_by_version_first: bool,
    ) -> Result<Arc<RecordComparison>> {
        let request_id = RequestId::new();
        let start = Instant::now();
        let records = validate_records(values).map_err(|err| {
            let err = err
                .with_op("validate_records")
                .with_request_id(request_id.clone());
            log_op_error!(
                "validate_records",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = request_id.as_str()
            );
            err
        })?;
        Ok(self.compare_as(&request_id, &records, sort_by_version_first))
    }

    fn compare_as(
        &self,
        request_id: &RequestId,
        records: &[ScanRecord],
        sort_by_version_first: bool,
    ) -> Arc<RecordComparison> {
        let start = Instant::now();
        log_op_start!(
            "compare",
            request_id = request_id.as_str(),
            columns = records.len()
        );

        let (result, cached) = self.lookup_or_compare(request_id, records, sort_by_version_first);

        log_op_end!(
            "compare",
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_str(),
            cached = cached
        );
        result
    }

    /// Cached result and `true`, or a fresh (now cached) result and `false`
    fn lookup_or_compare(
        &self,
        request_id: &RequestId,
        records: &[ScanRecord],
        sort_by_version_first: bool,
    ) -> (Arc<RecordComparison>, bool) {
        let compute = || {
            Arc::new(compare_records_with(
                records,
                sort_by_version_first,
                self.scalar_equality,
            ))
        };

        let key = match cache_key(records, sort_by_version_first) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!(
                    request_id = request_id.as_str(),
                    error = %e,
                    "cannot derive cache key; comparing without cache"
                );
                return (compute(), false);
            }
        };
        let digest = key_digest(&key);

        if let Some(hit) = self.cache.get(&key) {
            log_cache_event!(
                hit,
                "compare",
                request_id = request_id.as_str(),
                cache_key = digest.as_str()
            );
            return (hit, true);
        }
        log_cache_event!(
            miss,
            "compare",
            request_id = request_id.as_str(),
            cache_key = digest.as_str()
        );

        let result = compute();
        let evicted = self.cache.set(key, Arc::clone(&result));
        if evicted > 0 {
            log_cache_event!(
                evict,
                "compare",
                request_id = request_id.as_str(),
                evicted = evicted,
                cache_size = self.cache.size()
            );
        }
        (result, false)
    }
}
