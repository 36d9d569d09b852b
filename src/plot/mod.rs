//! Plotting of the columns that survive variance filtering

mod axis;
mod figure;
pub mod scale;
mod svg;

use std::path::PathBuf;

use polars::prelude::*;
use thiserror::Error;

use crate::pipeline::{
    filter_constant_columns, Diagnostic, FilterOutcome, Table, TableError, VarianceError,
};

pub use axis::AxisKind;
pub use figure::{line_segments, Figure, FigureSize, Panel, PIXELS_PER_INCH};

/// Default cutoff for [`plot_relevant_columns`]: only exactly constant
/// columns are left out.
pub const DEFAULT_PLOT_THRESHOLD: f64 = 0.0;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Column '{name}' not found in dataset: Specified x-axis not found in dataset")]
    AxisNotFound { name: String },

    #[error("Specified x-axis '{name}' is not numeric (dtype: {dtype})")]
    NonNumericAxis { name: String, dtype: String },

    #[error("Invalid figure size {width} x {height}: dimensions must be positive")]
    InvalidFigureSize { width: f64, height: f64 },

    #[error(transparent)]
    Filter(#[from] VarianceError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Failed to write chart to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Options for [`plot_relevant_columns`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotOptions {
    pub figsize: FigureSize,
    /// Columns with variance at or below this value are not plotted.
    pub threshold: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            figsize: FigureSize::default(),
            threshold: DEFAULT_PLOT_THRESHOLD,
        }
    }
}

/// A rendered chart plus what the filter step reported
#[derive(Debug, Clone)]
pub struct PlotOutcome {
    pub figure: Figure,
    pub filter: FilterOutcome,
}

impl PlotOutcome {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.filter.diagnostics
    }
}

/// Plot every column whose variance exceeds `options.threshold` against
/// the `x_axis` column, one subplot per column.
///
/// The x-axis column is exempt from filtering and may be numeric or
/// temporal (date, datetime, time). If it does not exist the plot is
/// aborted with [`PlotError::AxisNotFound`].
pub fn plot_relevant_columns(
    df: &DataFrame,
    x_axis: &str,
    options: &PlotOptions,
) -> Result<PlotOutcome, PlotError> {
    let FigureSize { width, height } = options.figsize;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(PlotError::InvalidFigureSize { width, height });
    }

    let filter = filter_constant_columns(df, &[x_axis], options.threshold)?;

    let axis_missing = filter.diagnostics.iter().any(
        |d| matches!(d, Diagnostic::IgnoredColumnNotFound { name } if name == x_axis),
    );
    if axis_missing {
        return Err(PlotError::AxisNotFound {
            name: x_axis.to_string(),
        });
    }

    let (x_values, x_kind) = axis::axis_values(&filter.frame, x_axis)?;

    let mut figure = Figure::new(options.figsize, x_axis, x_values);
    figure.set_x_kind(x_kind);
    for name in Table::column_names(&filter.frame) {
        if name == x_axis {
            continue;
        }
        let values = Table::column_values(&filter.frame, &name)?;
        figure.add_panel(&name, values);
    }

    Ok(PlotOutcome { figure, filter })
}
