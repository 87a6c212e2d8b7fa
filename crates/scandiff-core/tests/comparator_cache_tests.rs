#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Memoizing comparator: cache hits, bounding and logging

mod common;

use common::records;
use scandiff_core::diff::cache::{cache_key, key_digest};
use scandiff_core::logging_facility::test_capture::init_test_capture;
use scandiff_core::{Comparator, CompareConfig, ExErrorKind, ScalarEquality};
use scandiff_core_types::schema::{
    EVENT_CACHE_EVICT, EVENT_CACHE_HIT, EVENT_CACHE_MISS, FIELD_FIELD_NAME,
};
use serde_json::json;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

#[test]
fn test_second_call_does_not_recompare_fields() {
    let capture = init_test_capture();
    let comparator = Comparator::default();
    let marker = "CACHE_MARKER_FIELD_UNIQUE_1";
    let input = records(json!([{marker: "a"}, {marker: "b"}]));

    let first = comparator.compare(&input, false);
    let second = comparator.compare(&input, false);

    // Same allocation handed back
    assert!(Arc::ptr_eq(&first, &second));

    // The field comparator ran once
    let field_comparisons = capture.count_events(|e| e.field(FIELD_FIELD_NAME) == Some(marker));
    assert_eq!(field_comparisons, 1);
}

#[test]
fn test_hit_and_miss_events_carry_key_digest() {
    let capture = init_test_capture();
    let comparator = Comparator::default();
    let input = records(json!([{"APP_NAME": "CACHE_EVENT_UNIQUE_2"}]));
    let digest = key_digest(&cache_key(&input, true).unwrap());

    comparator.compare(&input, true);
    comparator.compare(&input, true);

    assert_eq!(capture.count_cache_events(EVENT_CACHE_MISS, &digest), 1);
    assert_eq!(capture.count_cache_events(EVENT_CACHE_HIT, &digest), 1);
}

#[test]
fn test_equal_serialization_shares_an_entry() {
    let comparator = Comparator::default();

    // Built separately; same serialized form
    let a = records(json!([{"SIZE": "1MB"}, {"SIZE": "2MB"}]));
    let b: Vec<scandiff_core::ScanRecord> =
        serde_json::from_str(r#"[{"SIZE":"1MB"},{"SIZE":"2MB"}]"#).unwrap();

    let first = comparator.compare(&a, false);
    let second = comparator.compare(&b, false);

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(comparator.cache().size(), 1);
}

#[test]
fn test_column_order_is_part_of_the_key() {
    let comparator = Comparator::default();
    let forward = records(json!([{"SIZE": "1MB"}, {"SIZE": "2MB"}]));
    let backward = records(json!([{"SIZE": "2MB"}, {"SIZE": "1MB"}]));

    comparator.compare(&forward, false);
    comparator.compare(&backward, false);

    assert_eq!(comparator.cache().size(), 2);
}

#[test]
fn test_clear_empties_cache_and_resets_stats() {
    let comparator = Comparator::default();
    let input = records(json!([{"SIZE": "1MB"}]));
    comparator.compare(&input, false);
    comparator.compare(&input, false);

    comparator.cache().clear();

    assert_eq!(comparator.cache().size(), 0);
    let stats = comparator.cache().stats();
    assert_eq!((stats.hits, stats.misses, stats.evictions), (0, 0, 0));
    assert!(comparator.cache().entries().is_empty());
}

#[test]
fn test_entries_expose_cached_results() {
    let comparator = Comparator::default();
    let input = records(json!([{"SIZE": "1MB"}]));
    let result = comparator.compare(&input, false);

    let entries = comparator.cache().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, cache_key(&input, false).unwrap());
    assert!(Arc::ptr_eq(&entries[0].1, &result));
}

#[test]
fn test_bounded_cache_evicts_least_recently_used() {
    let capture = init_test_capture();
    let comparator = Comparator::new(&CompareConfig {
        cache_capacity: NonZeroUsize::new(2),
        ..CompareConfig::default()
    });
    let a = records(json!([{"LRU_UNIQUE_3": "a"}]));
    let b = records(json!([{"LRU_UNIQUE_3": "b"}]));
    let c = records(json!([{"LRU_UNIQUE_3": "c"}]));

    let first_a = comparator.compare(&a, false);
    comparator.compare(&b, false);
    // Touch a so b becomes the eviction candidate
    comparator.compare(&a, false);
    comparator.compare(&c, false);

    assert_eq!(comparator.cache().size(), 2);
    assert_eq!(comparator.cache().stats().evictions, 1);
    assert!(Arc::ptr_eq(&comparator.compare(&a, false), &first_a));

    let keys: Vec<String> = comparator.cache().entries().into_iter().map(|(k, _)| k).collect();
    assert!(!keys.contains(&cache_key(&b, false).unwrap()));
    assert!(capture.count_events(|e| e.is("compare", EVENT_CACHE_EVICT)) >= 1);
}

#[test]
fn test_structural_equality_ignores_key_order() {
    let input: Vec<scandiff_core::ScanRecord> = serde_json::from_str(
        r#"[
            {"CODE_ANALYSIS_STATISTICS": {"high": 1, "info": 2}},
            {"CODE_ANALYSIS_STATISTICS": {"info": 2, "high": 1}}
        ]"#,
    )
    .unwrap();
    let structural = Comparator::new(&CompareConfig {
        scalar_equality: ScalarEquality::Structural,
        ..CompareConfig::default()
    });
    let order_sensitive = Comparator::default();

    assert!(!structural.compare(&input, false).has_differences());
    assert!(order_sensitive.compare(&input, false).has_differences());
}

#[test]
fn test_shared_comparator_across_threads() {
    let comparator = Arc::new(Comparator::default());
    let input = records(json!([{"SIZE": "1MB"}, {"SIZE": "3MB"}]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let comparator = Arc::clone(&comparator);
            let input = input.clone();
            thread::spawn(move || comparator.compare(&input, false))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for result in &results {
        assert_eq!(**result, *results[0]);
    }
    assert_eq!(comparator.cache().size(), 1);
}

#[test]
fn test_compare_json_rejects_invalid_record_without_caching() {
    let comparator = Comparator::default();
    let values = vec![json!({"APP_NAME": "X"}), json!("not a record")];

    let err = comparator.compare_json(&values, false).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidRecord);
    assert_eq!(err.record_index(), Some(1));
    assert_eq!(comparator.cache().size(), 0);
}

#[test]
fn test_compare_json_accepts_valid_records() {
    let comparator = Comparator::default();
    let values = vec![
        json!({"DOMAINS": [{"domain": "a.com"}]}),
        json!({"DOMAINS": [{"domain": "b.com"}]}),
    ];

    let result = comparator.compare_json(&values, false).unwrap();

    assert!(result.get("DOMAINS").unwrap().is_different());
    assert_eq!(comparator.cache().size(), 1);
}
