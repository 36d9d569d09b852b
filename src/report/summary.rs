//! Filter summary report rendered as a terminal table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{Decision, FilterOutcome};

/// Summary of a variance filtering run
#[derive(Debug, Default)]
pub struct FilterSummary {
    pub initial_columns: usize,
    pub final_columns: usize,
    pub threshold: f64,
    /// Dropped columns with their variance
    pub dropped: Vec<(String, f64)>,
    pub ignored: Vec<String>,
    pub undefined: Vec<String>,
    pub warnings: Vec<String>,
}

impl FilterSummary {
    pub fn from_outcome(outcome: &FilterOutcome, threshold: f64) -> Self {
        let mut summary = Self {
            initial_columns: outcome.columns.len(),
            final_columns: outcome.frame.width(),
            threshold,
            warnings: outcome.diagnostics.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        };

        for column in &outcome.columns {
            match column.decision {
                Decision::Constant => summary
                    .dropped
                    .push((column.name.clone(), column.variance.unwrap_or(0.0))),
                Decision::Ignored => summary.ignored.push(column.name.clone()),
                Decision::Undefined => summary.undefined.push(column.name.clone()),
                Decision::AboveThreshold => {}
            }
        }

        summary
    }

    pub fn reduction_pct(&self) -> f64 {
        if self.initial_columns > 0 {
            ((self.initial_columns - self.final_columns) as f64 / self.initial_columns as f64)
                * 100.0
        } else {
            0.0
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("FILTER SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Initial Columns"),
            Cell::new(self.initial_columns),
        ]);

        table.add_row(vec![
            Cell::new("🗑️  Dropped (Low Variance)"),
            Cell::new(self.dropped.len()).fg(if self.dropped.is_empty() {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("🛡️  Ignored"),
            Cell::new(self.ignored.len()),
        ]);

        table.add_row(vec![
            Cell::new("✅ Final Columns"),
            Cell::new(self.final_columns)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        let reduction_pct = self.reduction_pct();
        let color = if reduction_pct > 30.0 {
            Color::Green
        } else if reduction_pct > 10.0 {
            Color::Yellow
        } else {
            Color::Cyan
        };

        table.add_row(vec![
            Cell::new("📉 Reduction"),
            Cell::new(format!("{:.1}%", reduction_pct))
                .fg(color)
                .add_attribute(Attribute::Bold),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.dropped.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("DROPPED COLUMNS").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            println!(
                "      {} {}:",
                style("Variance").yellow(),
                style(format!("(<= {})", self.threshold)).dim()
            );
            for (name, variance) in &self.dropped {
                println!(
                    "        {} {} {}",
                    style("•").dim(),
                    name,
                    style(format!("{:.6}", variance)).dim()
                );
            }
        }

        if !self.undefined.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Kept with undefined variance").yellow(),
                style(format!("({})", self.undefined.len())).dim()
            );
            for name in &self.undefined {
                println!("        {} {}", style("•").dim(), name);
            }
        }
    }
}
