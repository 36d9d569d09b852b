//! varprune: command-line front end
//!
//! `varprune filter` drops near-constant columns from a CSV/Parquet file,
//! `varprune plot` charts the remaining columns against an x-axis column.

use anyhow::Result;
use clap::Parser;

use varprune::cli::{run_filter, run_plot, Cli, Commands, FilterArgs, PlotArgs};
use varprune::plot::FigureSize;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = cli.command.output_path();

    match &cli.command {
        Commands::Filter {
            input,
            ignore,
            threshold,
            report,
            infer_schema_length,
            ..
        } => run_filter(&FilterArgs {
            input,
            output: &output,
            ignore,
            threshold: *threshold,
            report: report.as_deref(),
            infer_schema_length: *infer_schema_length,
        }),
        Commands::Plot {
            input,
            x_axis,
            width,
            height,
            threshold,
            infer_schema_length,
            ..
        } => run_plot(&PlotArgs {
            input,
            output: &output,
            x_axis,
            figsize: FigureSize::new(*width, *height),
            threshold: *threshold,
            infer_schema_length: *infer_schema_length,
        }),
    }
}
