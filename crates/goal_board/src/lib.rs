//! Goal Board Library
//!
//! CSV (local or HTTP) → `GoalRecord` list → derived `GoalDataset`
//! plus the text rendering and interactive explorer used by `goalboard`.

pub mod explore;
pub mod goal_csv;
pub mod render;
pub mod selection;
pub mod source;

use anyhow::{Context, Result};
use goal_core::{DatasetSummary, GoalDataset};
use serde::Serialize;
use std::io::Read;
use std::time::Duration;
use tracing::info;

pub use goal_csv::{parse_goal_csv, ParseOptions, ParseStats};
pub use selection::{build_selection, require_league};
pub use source::{Source, DEFAULT_SOURCE, DEFAULT_TIMEOUT_SECS};

/// Load settings collected from the command line.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub source: Source,
    pub timeout: Duration,
    pub parse: ParseOptions,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            source: Source::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            parse: ParseOptions::default(),
        }
    }
}

/// What one load produced.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    /// Path or URL the rows came from
    pub source: String,
    /// Load time (RFC3339)
    pub loaded_at: String,
    pub stats: ParseStats,
    pub summary: DatasetSummary,
}

/// Read, parse and derive from any reader.
pub fn load_from_reader<R: Read>(
    reader: R,
    source_label: &str,
    options: ParseOptions,
) -> Result<(GoalDataset, LoadReport)> {
    let (records, stats) = parse_goal_csv(reader, options)
        .with_context(|| format!("Failed to load goals from {}", source_label))?;

    info!(
        "Parsed {} goals (failed: {}, total rows: {})",
        stats.parsed, stats.failed, stats.total_rows
    );

    let dataset = GoalDataset::derive(records);
    let summary = dataset.summary();

    info!(
        "Derived {} goals across {} matches in {} leagues",
        summary.goals, summary.matches, summary.leagues
    );

    Ok((
        dataset,
        LoadReport {
            source: source_label.to_string(),
            loaded_at: chrono::Utc::now().to_rfc3339(),
            stats,
            summary,
        },
    ))
}

/// Open the configured source and build the dataset.
pub fn load_dataset(config: &LoadConfig) -> Result<(GoalDataset, LoadReport)> {
    let label = config.source.to_string();
    info!("Loading goal data: {}", label);
    let reader = config.source.open(config.timeout)?;
    load_from_reader(reader, &label, config.parse)
}
