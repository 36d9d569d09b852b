//! `plot` subcommand: chart the relevant columns of a dataset as SVG

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::pipeline::load_dataset;
use crate::plot::{plot_relevant_columns, FigureSize, PlotOptions};
use crate::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_count,
    print_info, print_plot_config, print_step_header, print_step_time,
};

/// Options for [`run_plot`]
pub struct PlotArgs<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub x_axis: &'a str,
    pub figsize: FigureSize,
    pub threshold: f64,
    pub infer_schema_length: usize,
}

/// Load a dataset and render its non-constant columns against `x_axis`.
pub fn run_plot(args: &PlotArgs) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));
    print_plot_config(args.input, args.output, args.x_axis, args.threshold);

    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(args.input, args.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");
    print_step_time(step_start.elapsed());

    print_step_header(2, "Render Chart");
    let step_start = Instant::now();
    let options = PlotOptions {
        figsize: args.figsize,
        threshold: args.threshold,
    };
    let outcome = plot_relevant_columns(&df, args.x_axis, &options)
        .with_context(|| format!("Failed to plot {}", args.input.display()))?;

    let panels = outcome.figure.panels().len();
    if panels == 0 {
        print_info("No columns above the variance threshold; the chart is empty");
    } else {
        print_count("column(s) to plot", panels, None);
    }

    let spinner = create_spinner("Writing SVG...");
    outcome.figure.save(args.output)?;
    finish_with_success(&spinner, &format!("Saved to {}", args.output.display()));
    print_step_time(step_start.elapsed());

    print_completion("varprune plot complete!");

    Ok(())
}
