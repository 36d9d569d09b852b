//! X-axis interpretation: plain numbers or calendar/clock values

use chrono::DateTime;
use polars::prelude::*;

use super::scale::Range;
use super::PlotError;
use crate::pipeline::{is_numeric_dtype, TableError};

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

// Candidate tick spacings for temporal axes, in milliseconds
const TIME_STEPS: [f64; 25] = [
    MS_PER_SECOND,
    2.0 * MS_PER_SECOND,
    5.0 * MS_PER_SECOND,
    10.0 * MS_PER_SECOND,
    15.0 * MS_PER_SECOND,
    30.0 * MS_PER_SECOND,
    MS_PER_MINUTE,
    2.0 * MS_PER_MINUTE,
    5.0 * MS_PER_MINUTE,
    10.0 * MS_PER_MINUTE,
    15.0 * MS_PER_MINUTE,
    30.0 * MS_PER_MINUTE,
    MS_PER_HOUR,
    2.0 * MS_PER_HOUR,
    3.0 * MS_PER_HOUR,
    6.0 * MS_PER_HOUR,
    12.0 * MS_PER_HOUR,
    MS_PER_DAY,
    2.0 * MS_PER_DAY,
    7.0 * MS_PER_DAY,
    14.0 * MS_PER_DAY,
    30.0 * MS_PER_DAY,
    91.0 * MS_PER_DAY,
    182.0 * MS_PER_DAY,
    365.0 * MS_PER_DAY,
];

/// How the x-axis values are stored and labelled.
///
/// Temporal columns are plotted on their physical integer representation;
/// the kind remembers the unit so tick labels can be printed as dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisKind {
    #[default]
    Numeric,
    /// Days since the Unix epoch
    Date,
    /// Timestamps since the Unix epoch in the given unit
    Datetime(TimeUnit),
    /// Nanoseconds since midnight
    Time,
}

impl AxisKind {
    /// Axis kind for a column dtype, or `None` if it cannot be plotted.
    /// Durations are plotted as plain numbers in their own unit.
    pub fn from_dtype(dtype: &DataType) -> Option<AxisKind> {
        match dtype {
            DataType::Date => Some(AxisKind::Date),
            DataType::Datetime(unit, _) => Some(AxisKind::Datetime(*unit)),
            DataType::Time => Some(AxisKind::Time),
            DataType::Duration(_) => Some(AxisKind::Numeric),
            dtype if is_numeric_dtype(dtype) => Some(AxisKind::Numeric),
            _ => None,
        }
    }

    pub fn is_temporal(self) -> bool {
        !matches!(self, AxisKind::Numeric)
    }

    fn to_millis(self, value: f64) -> f64 {
        match self {
            AxisKind::Numeric | AxisKind::Datetime(TimeUnit::Milliseconds) => value,
            AxisKind::Date => value * MS_PER_DAY,
            AxisKind::Datetime(TimeUnit::Microseconds) => value / 1e3,
            AxisKind::Datetime(TimeUnit::Nanoseconds) | AxisKind::Time => value / 1e6,
        }
    }

    fn from_millis(self, ms: f64) -> f64 {
        match self {
            AxisKind::Numeric | AxisKind::Datetime(TimeUnit::Milliseconds) => ms,
            AxisKind::Date => ms / MS_PER_DAY,
            AxisKind::Datetime(TimeUnit::Microseconds) => ms * 1e3,
            AxisKind::Datetime(TimeUnit::Nanoseconds) | AxisKind::Time => ms * 1e6,
        }
    }

    /// Tick positions (in axis units) and their labels.
    pub fn ticks(self, range: Range, count: u32) -> Vec<(f64, String)> {
        if !self.is_temporal() {
            let ticks = range.nice_ticks(count);
            return ticks
                .values
                .iter()
                .map(|v| (*v, ticks.label(*v)))
                .collect();
        }

        let ms_range = Range::new(self.to_millis(range.min), self.to_millis(range.max));
        let (lo, hi) = if ms_range.min <= ms_range.max {
            (ms_range.min, ms_range.max)
        } else {
            (ms_range.max, ms_range.min)
        };

        let wanted = (hi - lo) / f64::from(count.max(1));
        let step = match TIME_STEPS.iter().copied().find(|s| *s >= wanted) {
            Some(step) => step,
            // Spans beyond a few years: whole days on a nice numeric grid
            None => {
                let days = Range::new(lo / MS_PER_DAY, hi / MS_PER_DAY).nice_ticks(count);
                return days
                    .values
                    .iter()
                    .map(|d| {
                        let ms = d * MS_PER_DAY;
                        (self.from_millis(ms), self.label_millis(ms, MS_PER_DAY))
                    })
                    .collect();
            }
        };

        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last)
            .map(|i| {
                let ms = i as f64 * step;
                (self.from_millis(ms), self.label_millis(ms, step))
            })
            .collect()
    }

    fn label_millis(self, ms: f64, step: f64) -> String {
        let format = match self {
            AxisKind::Time if step >= MS_PER_MINUTE => "%H:%M",
            AxisKind::Time => "%H:%M:%S",
            _ if step >= MS_PER_DAY => "%Y-%m-%d",
            _ if step >= MS_PER_MINUTE => "%Y-%m-%d %H:%M",
            _ => "%Y-%m-%d %H:%M:%S",
        };
        match DateTime::from_timestamp_millis(ms.round() as i64) {
            Some(dt) => dt.format(format).to_string(),
            None => format!("{ms}"),
        }
    }
}

/// Read the x-axis column as `f64` positions plus its kind.
///
/// Numeric columns are cast directly; temporal columns go through their
/// physical integer representation.
pub fn axis_values(
    df: &DataFrame,
    name: &str,
) -> Result<(Vec<Option<f64>>, AxisKind), PlotError> {
    let column = df.column(name).map_err(|_| PlotError::AxisNotFound {
        name: name.to_string(),
    })?;

    let kind = AxisKind::from_dtype(column.dtype()).ok_or_else(|| PlotError::NonNumericAxis {
        name: name.to_string(),
        dtype: column.dtype().to_string(),
    })?;

    let physical = column
        .to_physical_repr()
        .cast(&DataType::Float64)
        .map_err(TableError::from)?;
    let values = physical
        .f64()
        .map_err(TableError::from)?
        .into_iter()
        .collect();

    Ok((values, kind))
}
