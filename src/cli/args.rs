//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// varprune - Drop near-constant columns from a dataset and plot the rest
#[derive(Parser, Debug)]
#[command(name = "varprune")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove columns whose variance is at or below a threshold
    Filter {
        /// Input file path (CSV or Parquet)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (CSV or Parquet, determined by extension).
        /// Defaults to input directory with '_filtered' suffix (e.g., data.csv -> data_filtered.csv).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Columns kept regardless of their variance (comma-separated).
        #[arg(long, value_delimiter = ',')]
        ignore: Vec<String>,

        /// Variance threshold - drop columns with variance at or below this value
        #[arg(long, default_value = "0.01", value_parser = validate_threshold)]
        threshold: f64,

        /// Write a JSON report with per-column variances to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Number of rows to use for schema inference (CSV only).
        /// Use 0 for full table scan (very slow for large files).
        #[arg(long, default_value = "10000")]
        infer_schema_length: usize,
    },

    /// Plot columns with variance above a threshold against an x-axis column
    Plot {
        /// Input file path (CSV or Parquet)
        #[arg(short, long)]
        input: PathBuf,

        /// Column used as the shared horizontal axis
        #[arg(short = 'x', long)]
        x_axis: String,

        /// Output SVG path. Defaults to input directory with '_plot.svg' suffix.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Figure width in inches
        #[arg(long, default_value = "14", value_parser = validate_dimension)]
        width: f64,

        /// Figure height in inches
        #[arg(long, default_value = "10", value_parser = validate_dimension)]
        height: f64,

        /// Variance threshold - columns with variance at or below this value are not plotted
        #[arg(long, default_value = "0", value_parser = validate_threshold)]
        threshold: f64,

        /// Number of rows to use for schema inference (CSV only).
        #[arg(long, default_value = "10000")]
        infer_schema_length: usize,
    },
}

/// Derive a sibling path of `input` named `<stem><suffix>.<extension>`.
pub fn derive_output_path(input: &Path, suffix: &str, extension: Option<&str>) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = extension
        .or_else(|| input.extension().and_then(|e| e.to_str()))
        .unwrap_or("parquet");
    parent.join(format!("{}{}.{}", stem, suffix, extension))
}

impl Commands {
    /// Get the output path, deriving it from the input if not explicitly provided.
    pub fn output_path(&self) -> PathBuf {
        match self {
            Commands::Filter { input, output, .. } => output
                .clone()
                .unwrap_or_else(|| derive_output_path(input, "_filtered", None)),
            Commands::Plot { input, output, .. } => output
                .clone()
                .unwrap_or_else(|| derive_output_path(input, "_plot", Some("svg"))),
        }
    }
}

/// Validator for variance thresholds
fn validate_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !value.is_finite() || value < 0.0 {
        Err(format!(
            "threshold must be a non-negative finite number, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}

/// Validator for figure dimensions
fn validate_dimension(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !value.is_finite() || value <= 0.0 {
        Err(format!("figure dimensions must be positive, got {}", value))
    } else {
        Ok(value)
    }
}
