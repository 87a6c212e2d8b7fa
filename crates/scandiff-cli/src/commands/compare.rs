//! Compare command
//!
//! Usage: scandiff compare <FILE>... [--sort-by-version] [--format json|summary]

use clap::{Args, ValueEnum};
use scandiff_core::diff::{render_human_summary, RecordComparison, SummaryOptions};
use scandiff_core::errors::ScanDiffError;
use scandiff_core::logging_facility::{init, Profile};
use scandiff_core::rules::validation::parse_records;
use scandiff_core::{Comparator, CompareConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// JSON files, each holding an array of scan records
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Order columns by ascending VERSION_NAME before comparing
    #[arg(long)]
    pub sort_by_version: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Leave out fields that are identical in every column (summary only)
    #[arg(long)]
    pub hide_unchanged: bool,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit structured logs to stderr
    #[arg(long, value_enum)]
    pub log_profile: Option<LogProfile>,

    /// Print cache statistics to stderr when done
    #[arg(long)]
    pub cache_stats: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    Dev,
    Prod,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
        }
    }
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(profile) = args.log_profile {
        init(profile.into());
    }

    let config = match &args.config {
        Some(path) => CompareConfig::load(path)?,
        None => CompareConfig::default(),
    };
    let sort = args.sort_by_version || config.sort_by_version_first;
    let comparator = Comparator::new(&config);

    let mut results: Vec<Arc<RecordComparison>> = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let document = read_document(path)?;
        let records = parse_records(&document).map_err(|e| e.with_op("compare"))?;
        tracing::debug!(file = %path.display(), records = records.len(), "loaded scan records");
        results.push(comparator.compare(&records, sort));
    }

    match args.format {
        OutputFormat::Json => {
            let rendered = match results.as_slice() {
                [single] => serde_json::to_string_pretty(single.as_ref())?,
                many => {
                    let all: Vec<&RecordComparison> = many.iter().map(Arc::as_ref).collect();
                    serde_json::to_string_pretty(&all)?
                }
            };
            println!("{}", rendered);
        }
        OutputFormat::Summary => {
            let options = SummaryOptions {
                hide_unchanged: args.hide_unchanged,
            };
            for result in &results {
                print!("{}", render_human_summary(result, options));
            }
        }
    }

    if args.cache_stats {
        let stats = comparator.cache().stats();
        eprintln!(
            "cache: {} entries, {} hits, {} misses",
            stats.entries, stats.hits, stats.misses
        );
    }

    Ok(())
}

fn read_document(path: &Path) -> Result<serde_json::Value, ScanDiffError> {
    let text = std::fs::read_to_string(path).map_err(|e| ScanDiffError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(serde_json::from_str(&text)?)
}
