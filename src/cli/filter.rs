//! `filter` subcommand: drop low-variance columns and save the result

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use console::style;

use crate::pipeline::{dataset_stats, filter_constant_columns, load_dataset, save_dataset};
use crate::report::{export_variance_report, FilterSummary, ReportParams};
use crate::utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_count, print_filter_config, print_info, print_step_header, print_step_time,
    print_success, print_warning,
};

/// Options for [`run_filter`]
pub struct FilterArgs<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub ignore: &'a [String],
    pub threshold: f64,
    pub report: Option<&'a Path>,
    pub infer_schema_length: usize,
}

/// Load a dataset, remove columns at or below the variance threshold and
/// write the filtered dataset.
pub fn run_filter(args: &FilterArgs) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));
    print_filter_config(args.input, args.output, args.ignore, args.threshold);

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(args.input, args.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols, memory_mb) = dataset_stats(&df);
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);
    print_step_time(step_start.elapsed());

    // Step 2: Variance scan
    print_step_header(2, "Variance Analysis");
    let step_start = Instant::now();
    let spinner = create_spinner("Computing column variances...");
    let outcome = filter_constant_columns(&df, args.ignore, args.threshold)?;
    if outcome.diagnostics.is_empty() {
        finish_with_success(&spinner, "Variance analysis complete");
    } else {
        finish_with_warning(&spinner, "Variance analysis complete with warnings");
    }

    for diagnostic in &outcome.diagnostics {
        print_warning(&diagnostic.to_string());
    }

    let dropped = outcome.dropped();
    if dropped.is_empty() {
        print_info("No columns at or below the variance threshold");
    } else {
        print_count(
            "low-variance column(s)",
            dropped.len(),
            Some(&format!("(<= {})", args.threshold)),
        );
        print_success("Dropped low-variance columns");
    }
    print_step_time(step_start.elapsed());

    // Step 3: Save output
    print_step_header(3, "Save Results");
    let step_start = Instant::now();
    let spinner = create_spinner("Writing output file...");
    let mut filtered = outcome.frame.clone();
    save_dataset(&mut filtered, args.output)?;
    finish_with_success(&spinner, &format!("Saved to {}", args.output.display()));

    if let Some(report_path) = args.report {
        let input_file = args.input.display().to_string();
        export_variance_report(
            &outcome,
            report_path,
            &ReportParams {
                input_file: &input_file,
                threshold: args.threshold,
                ignore: args.ignore,
            },
        )?;
        print_success(&format!("Variance report written to {}", report_path.display()));
    }
    print_step_time(step_start.elapsed());

    FilterSummary::from_outcome(&outcome, args.threshold).display();
    print_completion("varprune filter complete!");

    Ok(())
}
