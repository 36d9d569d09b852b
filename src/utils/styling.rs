//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static SHIELD: Emoji<'_, '_> = Emoji("🛡️  ", "");

const BOX_WIDTH: usize = 56;

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("σ²").magenta().bold(),
        style("varprune").cyan().bold()
    );
    println!(
        "    {}",
        style("Drop the constant columns, plot the rest").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

fn print_box_top(title: &str) {
    let line = "─".repeat(BOX_WIDTH - 2);
    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style(format!("⚙️  {}", title)).cyan().bold(),
        " ".repeat(BOX_WIDTH.saturating_sub(title.chars().count() + 7))
    );
    println!("    ├{}┤", line);
}

fn print_box_bottom() {
    println!("    └{}┘", "─".repeat(BOX_WIDTH - 2));
    println!();
}

/// Print configuration card for a filter run
pub fn print_filter_config(input: &Path, output: &Path, ignore: &[String], threshold: f64) {
    print_box_top("Filter Configuration");
    println!("    │  {} Input:  {:<39}│", FOLDER, truncate_path(input, 38));
    println!("    │  {} Output: {:<39}│", SAVE, truncate_path(output, 38));
    let ignored = if ignore.is_empty() {
        "(none)".to_string()
    } else {
        ignore.join(", ")
    };
    println!(
        "    │  {} Ignore: {:<39}│",
        SHIELD,
        truncate_string(&ignored, 38)
    );
    println!(
        "    │  {} Variance threshold: {:<27}│",
        CHART,
        style(format!("{}", threshold)).yellow()
    );
    print_box_bottom();
}

/// Print configuration card for a plot run
pub fn print_plot_config(input: &Path, output: &Path, x_axis: &str, threshold: f64) {
    print_box_top("Plot Configuration");
    println!("    │  {} Input:  {:<39}│", FOLDER, truncate_path(input, 38));
    println!("    │  {} Output: {:<39}│", SAVE, truncate_path(output, 38));
    println!(
        "    │  {} X-axis: {:<39}│",
        SHIELD,
        truncate_string(x_axis, 38)
    );
    println!(
        "    │  {} Variance threshold: {:<27}│",
        CHART,
        style(format!("{}", threshold)).yellow()
    );
    print_box_bottom();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a non-fatal warning to stderr
pub fn print_warning(message: &str) {
    eprintln!("    {} {}", WARN, style(message).yellow());
}

/// Print the elapsed time of a step
pub fn print_step_time(elapsed: std::time::Duration) {
    println!(
        "    {}",
        style(format!("⏱  {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion(message: &str) {
    println!();
    println!("    {} {}", ROCKET, style(message).green().bold());
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, threshold_info: Option<&str>) {
    if let Some(info) = threshold_info {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!("      Found {} {}", style(count).yellow().bold(), description);
    }
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(count - max_len + 3).collect();
        format!("...{}", tail)
    }
}
