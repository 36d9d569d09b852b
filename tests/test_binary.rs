//! End-to-end tests running the compiled binary

use assert_cmd::Command;
use predicates::prelude::*;
use varprune::pipeline::load_dataset;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_filter_command_writes_filtered_csv() {
    let mut df = common::create_variance_test_dataframe();
    let (temp_dir, csv_path) = common::create_temp_csv(&mut df);
    let output = temp_dir.path().join("filtered.csv");
    let report = temp_dir.path().join("report.json");

    Command::cargo_bin("varprune")
        .unwrap()
        .arg("filter")
        .arg("-i")
        .arg(&csv_path)
        .arg("-o")
        .arg(&output)
        .arg("--report")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("FILTER SUMMARY"));

    let filtered = load_dataset(&output, 100).unwrap();
    common::assert_columns(&filtered, &["time", "signal", "binary", "ints", "sparse"]);
    assert!(report.exists());
}

#[test]
fn test_filter_command_warns_on_missing_ignore_column() {
    let mut df = common::create_scenario_dataframe();
    let (temp_dir, csv_path) = common::create_temp_csv(&mut df);
    let output = temp_dir.path().join("filtered.csv");

    Command::cargo_bin("varprune")
        .unwrap()
        .args(["filter", "--ignore", "a,ghost"])
        .arg("-i")
        .arg(&csv_path)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("ghost"));

    let filtered = load_dataset(&output, 100).unwrap();
    common::assert_columns(&filtered, &["a", "b", "x"]);
}

#[test]
fn test_filter_command_default_output_path() {
    let mut df = common::create_scenario_dataframe();
    let (temp_dir, csv_path) = common::create_temp_csv(&mut df);

    Command::cargo_bin("varprune")
        .unwrap()
        .arg("filter")
        .arg("-i")
        .arg(&csv_path)
        .assert()
        .success();

    assert!(temp_dir.path().join("test_data_filtered.csv").exists());
}

#[test]
fn test_plot_command_writes_svg() {
    let mut df = common::create_variance_test_dataframe();
    let (temp_dir, parquet_path) = common::create_temp_parquet(&mut df);
    let output = temp_dir.path().join("chart.svg");

    Command::cargo_bin("varprune")
        .unwrap()
        .args(["plot", "-x", "time", "--width", "8", "--height", "6"])
        .arg("-i")
        .arg(&parquet_path)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="800""#));
    assert!(svg.contains(">signal</text>"));
    assert!(!svg.contains(">constant</text>"));
}

#[test]
fn test_plot_command_missing_axis_fails() {
    let mut df = common::create_scenario_dataframe();
    let (temp_dir, csv_path) = common::create_temp_csv(&mut df);
    let output = temp_dir.path().join("chart.svg");

    Command::cargo_bin("varprune")
        .unwrap()
        .args(["plot", "-x", "nope"])
        .arg("-i")
        .arg(&csv_path)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("x-axis not found"));

    assert!(!output.exists());
}

#[test]
fn test_plot_command_with_date_axis_in_csv() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("daily.csv");
    std::fs::write(
        &csv_path,
        "day,sales,flat\n2024-03-01,10.0,1\n2024-03-02,12.5,1\n2024-03-03,9.0,1\n",
    )
    .unwrap();
    let output = temp_dir.path().join("daily.svg");

    Command::cargo_bin("varprune")
        .unwrap()
        .args(["plot", "-x", "day"])
        .arg("-i")
        .arg(&csv_path)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains(">sales</text>"));
    assert!(!svg.contains(">flat</text>"));
    assert!(svg.contains("2024-03-0"));
}
