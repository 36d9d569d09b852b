//! Low-variance (near-constant) column filtering

use std::fmt;

use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use super::table::{to_float_column, Table, TableError};

/// Default cutoff used by [`filter_constant_columns_default`].
pub const DEFAULT_FILTER_THRESHOLD: f64 = 0.01;

/// Errors that abort a variance scan.
#[derive(Debug, Error)]
pub enum VarianceError {
    #[error("Variance threshold must be a non-negative finite number, got {0}")]
    InvalidThreshold(f64),

    /// A scanned column could not be read as numbers.
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// A non-fatal problem noticed while filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A name in the ignore set does not exist in the dataset.
    IgnoredColumnNotFound { name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IgnoredColumnNotFound { name } => write!(
                f,
                "Column '{}' to be ignored not found in dataset",
                name
            ),
        }
    }
}

/// Why a column ended up in (or out of) the filtered dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Listed in the ignore set; variance was not checked.
    Ignored,
    /// Variance above the threshold.
    AboveThreshold,
    /// No valid values, so variance is undefined.
    Undefined,
    /// Variance at or below the threshold.
    Constant,
}

impl Decision {
    pub fn is_kept(self) -> bool {
        !matches!(self, Decision::Constant)
    }
}

/// Per-column result of a variance scan
#[derive(Debug, Clone, Serialize)]
pub struct ColumnVariance {
    pub name: String,
    /// Population variance; `None` for ignored columns and columns without
    /// any valid value.
    pub variance: Option<f64>,
    pub decision: Decision,
}

/// Result of [`filter_constant_columns`]
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// The input dataset restricted to the kept columns, in input order.
    pub frame: DataFrame,
    pub diagnostics: Vec<Diagnostic>,
    /// One entry per input column, in input order.
    pub columns: Vec<ColumnVariance>,
}

impl FilterOutcome {
    /// Names of the columns that were removed.
    pub fn dropped(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| !c.decision.is_kept())
            .map(|c| c.name.clone())
            .collect()
    }

    /// Names of the columns that survived.
    pub fn kept(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.decision.is_kept())
            .map(|c| c.name.clone())
            .collect()
    }
}

/// Population variance (ddof = 0) of a column, skipping nulls and NaNs.
///
/// Returns `Ok(None)` when the column holds no valid value.
pub fn column_variance(column: &Column) -> Result<Option<f64>, VarianceError> {
    let float_col = to_float_column(column)?;
    let values: Vec<f64> = float_col
        .f64()?
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .collect();

    Ok(population_variance(&values))
}

fn population_variance(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    // Infinite inputs produce NaN, which cannot be compared with a threshold
    if variance.is_nan() {
        None
    } else {
        Some(variance)
    }
}

/// Remove columns whose variance is at or below `threshold`.
///
/// Columns named in `ignore` are kept unconditionally and never inspected.
/// Ignore entries missing from the dataset are reported as diagnostics and
/// otherwise have no effect.
///
/// # Arguments
/// * `df` - Dataset to scan; it is not modified
/// * `ignore` - Column names exempt from removal
/// * `threshold` - Non-negative variance cutoff
pub fn filter_constant_columns<S: AsRef<str>>(
    df: &DataFrame,
    ignore: &[S],
    threshold: f64,
) -> Result<FilterOutcome, VarianceError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(VarianceError::InvalidThreshold(threshold));
    }

    let ignore: Vec<&str> = ignore.iter().map(|s| s.as_ref()).collect();

    let diagnostics: Vec<Diagnostic> = ignore
        .iter()
        .filter(|name| !Table::has_column(df, name))
        .map(|name| Diagnostic::IgnoredColumnNotFound {
            name: name.to_string(),
        })
        .collect();

    let columns: Vec<ColumnVariance> = df
        .get_columns()
        .par_iter()
        .map(|column| {
            let name = column.name().to_string();
            if ignore.iter().any(|ignored| *ignored == name) {
                return Ok(ColumnVariance {
                    name,
                    variance: None,
                    decision: Decision::Ignored,
                });
            }

            let variance = column_variance(column)?;
            let decision = match variance {
                None => Decision::Undefined,
                Some(v) if v <= threshold => Decision::Constant,
                Some(_) => Decision::AboveThreshold,
            };
            Ok(ColumnVariance {
                name,
                variance,
                decision,
            })
        })
        .collect::<Result<_, VarianceError>>()?;

    let dropped: Vec<&str> = columns
        .iter()
        .filter(|c| !c.decision.is_kept())
        .map(|c| c.name.as_str())
        .collect();

    let frame = df.drop_many(dropped);

    Ok(FilterOutcome {
        frame,
        diagnostics,
        columns,
    })
}

/// [`filter_constant_columns`] with [`DEFAULT_FILTER_THRESHOLD`].
pub fn filter_constant_columns_default<S: AsRef<str>>(
    df: &DataFrame,
    ignore: &[S],
) -> Result<FilterOutcome, VarianceError> {
    filter_constant_columns(df, ignore, DEFAULT_FILTER_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_variance() {
        let v = population_variance(&[0.0, 1.0, 2.0]).unwrap();
        assert!((v - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(population_variance(&[4.0, 4.0]), Some(0.0));
        assert_eq!(population_variance(&[]), None);
    }

    #[test]
    fn test_population_variance_infinite_is_undefined() {
        assert_eq!(population_variance(&[1.0, f64::INFINITY]), None);
    }
}
