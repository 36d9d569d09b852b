//! Typed column lookup over tabular data

use polars::prelude::*;
use thiserror::Error;

/// Errors raised when a column cannot be read as numeric values.
#[derive(Debug, Error)]
pub enum TableError {
    /// The requested column does not exist.
    #[error("Column '{name}' not found in dataset")]
    ColumnNotFound { name: String },

    /// The column exists but cannot be interpreted as numbers.
    #[error("Column '{name}' is not numeric (dtype: {dtype})")]
    NonNumeric { name: String, dtype: String },

    /// Any other failure reported by polars while reading the column.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Read-only access to named numeric columns.
///
/// Lookups return explicit errors instead of panicking so callers can decide
/// whether a missing column is fatal.
pub trait Table {
    /// Whether a column with this exact name exists.
    fn has_column(&self, name: &str) -> bool;

    /// Values of a numeric column cast to `f64`. Nulls stay `None`.
    fn column_values(&self, name: &str) -> Result<Vec<Option<f64>>, TableError>;

    /// Column names in dataset order.
    fn column_names(&self) -> Vec<String>;

    /// Number of rows shared by every column.
    fn row_count(&self) -> usize;
}

/// Whether a polars dtype can be cast to `f64` for variance and plotting
/// purposes. All-null columns count as numeric.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    dtype.is_primitive_numeric() || dtype.is_bool() || matches!(dtype, DataType::Null)
}

/// Cast a column to `Float64`, rejecting non-numeric dtypes.
pub(crate) fn to_float_column(column: &Column) -> Result<Column, TableError> {
    if !is_numeric_dtype(column.dtype()) {
        return Err(TableError::NonNumeric {
            name: column.name().to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    Ok(column.cast(&DataType::Float64)?)
}

impl Table for DataFrame {
    fn has_column(&self, name: &str) -> bool {
        self.get_column_index(name).is_some()
    }

    fn column_values(&self, name: &str) -> Result<Vec<Option<f64>>, TableError> {
        let column = self
            .column(name)
            .map_err(|_| TableError::ColumnNotFound {
                name: name.to_string(),
            })?;
        let float_col = to_float_column(column)?;
        Ok(float_col.f64()?.into_iter().collect())
    }

    fn column_names(&self) -> Vec<String> {
        self.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn row_count(&self) -> usize {
        self.height()
    }
}
