//! CLI module - argument parsing and subcommand runners

mod args;
pub mod filter;
pub mod plot;

pub use args::{derive_output_path, Cli, Commands};
pub use filter::{run_filter, FilterArgs};
pub use plot::{run_plot, PlotArgs};
