//! Variance report export to JSON

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{ColumnVariance, Diagnostic, FilterOutcome};

/// Metadata about the filtering run
#[derive(Serialize)]
pub struct ReportMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    pub varprune_version: String,
    pub input_file: String,
    pub threshold: f64,
    pub ignore: Vec<String>,
}

#[derive(Serialize)]
pub struct ReportSummary {
    pub columns_scanned: usize,
    pub columns_kept: usize,
    pub columns_dropped: usize,
    pub rows: usize,
}

/// Complete variance report
#[derive(Serialize)]
pub struct VarianceReport<'a> {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub diagnostics: &'a [Diagnostic],
    pub columns: &'a [ColumnVariance],
}

/// Parameters recorded in the report metadata
pub struct ReportParams<'a> {
    pub input_file: &'a str,
    pub threshold: f64,
    pub ignore: &'a [String],
}

/// Build the report for a finished filter run.
pub fn build_variance_report<'a>(
    outcome: &'a FilterOutcome,
    params: &ReportParams,
) -> VarianceReport<'a> {
    let columns_dropped = outcome.dropped().len();

    VarianceReport {
        metadata: ReportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            varprune_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            threshold: params.threshold,
            ignore: params.ignore.to_vec(),
        },
        summary: ReportSummary {
            columns_scanned: outcome.columns.len(),
            columns_kept: outcome.columns.len() - columns_dropped,
            columns_dropped,
            rows: outcome.frame.height(),
        },
        diagnostics: &outcome.diagnostics,
        columns: &outcome.columns,
    }
}

/// Export a variance report to a pretty-printed JSON file
pub fn export_variance_report(
    outcome: &FilterOutcome,
    output_path: &Path,
    params: &ReportParams,
) -> Result<()> {
    let report = build_variance_report(outcome, params);

    let json = serde_json::to_string_pretty(&report)
        .context("Failed to serialize variance report")?;
    std::fs::write(output_path, json).with_context(|| {
        format!(
            "Failed to write variance report: {}",
            output_path.display()
        )
    })?;

    Ok(())
}
