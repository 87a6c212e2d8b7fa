//! Comparison Demonstration
//!
//! Compares three scans of the same app and prints the structured result
//! next to the Markdown summary.
//!
//! Key concepts illustrated:
//! 1. Version-ordered columns
//! 2. Collection chips (new / removed) versus scalar uniqueness
//! 3. Memoized comparisons through a shared `Comparator`

use scandiff_core::diff::{display_rows, render_human_summary, DiffStatus, SummaryOptions};
use scandiff_core::rules::validation::parse_records;
use scandiff_core::{Comparator, CompareConfig};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== scandiff Comparison Demo ===\n");

    let document = json!([
        {
            "APP_NAME": "Notes", "VERSION_NAME": "2.10", "SIZE": "14MB",
            "DOMAINS": [{"domain": "api.notes.app"}, {"domain": "cdn.ads.example"}],
            "PERMISSIONS": [{"permission": "CAMERA"}, {"permission": "READ_CONTACTS"}],
            "TOP_MALWARE_PERMISSIONS": "CAMERA, READ_CONTACTS"
        },
        {
            "APP_NAME": "Notes", "VERSION_NAME": "2.9", "SIZE": "12MB",
            "DOMAINS": [{"domain": "api.notes.app"}],
            "PERMISSIONS": [{"permission": "CAMERA"}],
            "TOP_MALWARE_PERMISSIONS": "CAMERA"
        },
        {
            "APP_NAME": "Notes", "VERSION_NAME": "2.11", "SIZE": "14MB",
            "DOMAINS": [{"domain": "api.notes.app"}],
            "PERMISSIONS": [{"permission": "CAMERA"}],
            "TOP_MALWARE_PERMISSIONS": "CAMERA"
        }
    ]);
    let records = parse_records(&document)?;

    let comparator = Comparator::new(&CompareConfig::default());
    let result = comparator.compare(&records, true);

    println!("## Columns\n");
    println!("{}\n", result.column_labels().join(" | "));

    println!("## Changed rows\n");
    for row in display_rows(&result, true) {
        match row.comparison.as_collection() {
            Some(collection) => {
                let new: usize = collection.values.iter().map(|c| c.count(DiffStatus::New)).sum();
                let removed: usize = collection
                    .values
                    .iter()
                    .map(|c| c.count(DiffStatus::Removed))
                    .sum();
                println!("{:<26} +{} -{}", row.field, new, removed);
            }
            None => println!("{:<26} changed", row.field),
        }
    }

    println!("\n## Summary\n");
    print!(
        "{}",
        render_human_summary(&result, SummaryOptions { hide_unchanged: true })
    );

    // Same arguments again: served from the cache
    comparator.compare(&records, true);
    let stats = comparator.cache().stats();
    println!(
        "\ncache: {} entries, {} hits, {} misses",
        stats.entries, stats.hits, stats.misses
    );

    Ok(())
}
