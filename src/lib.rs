//! varprune: low-variance column filtering and plotting
//!
//! A library for removing near-constant columns from tabular datasets
//! and charting the remaining columns against a chosen x-axis.

pub mod cli;
pub mod pipeline;
pub mod plot;
pub mod report;
pub mod utils;

pub use pipeline::{
    filter_constant_columns, filter_constant_columns_default, Diagnostic, FilterOutcome,
    DEFAULT_FILTER_THRESHOLD,
};
pub use plot::{plot_relevant_columns, FigureSize, PlotOptions, DEFAULT_PLOT_THRESHOLD};
