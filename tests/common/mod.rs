//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// The three-column dataset used throughout the filter scenarios
///
/// - `a`: constant (variance 0)
/// - `b`: variance 2/3
/// - `x`: variance 2/3, typically used as the x-axis
pub fn create_scenario_dataframe() -> DataFrame {
    df! {
        "a" => [1.0f64, 1.0, 1.0],
        "b" => [1.0f64, 2.0, 3.0],
        "x" => [0.0f64, 1.0, 2.0],
    }
    .unwrap()
}

/// A wider DataFrame with known variance characteristics
///
/// - `time`: 0..10, the natural x-axis
/// - `signal`: large variance
/// - `constant`: zero variance
/// - `near_constant`: variance 0.0009 (below the 0.01 default)
/// - `binary`: alternating 0/1, variance exactly 0.25
/// - `ints`: integer column with variance 8.25
/// - `sparse`: mostly null, remaining values 1 and 10 (variance 20.25)
pub fn create_variance_test_dataframe() -> DataFrame {
    df! {
        "time" => [0.0f64, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        "signal" => [3.0f64, 7.0, 1.0, 9.0, 4.0, 8.0, 2.0, 6.0, 5.0, 0.0],
        "constant" => [5.0f64; 10],
        "near_constant" => [1.03f64, 0.97, 1.03, 0.97, 1.03, 0.97, 1.03, 0.97, 1.03, 0.97],
        "binary" => [0.0f64, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
        "ints" => [1i32, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        "sparse" => [Some(1.0f64), None, None, None, None, None, None, None, None, Some(10.0)],
    }
    .unwrap()
}

/// Create a larger random DataFrame for stress tests
pub fn create_large_test_dataframe(rows: usize, cols: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let mut columns: Vec<Column> = Vec::with_capacity(cols + 1);
    columns.push(Column::new(
        "index".into(),
        (0..rows).map(|i| i as f64).collect::<Vec<f64>>(),
    ));

    for i in 0..cols {
        let values: Vec<f64> = if i % 3 == 0 {
            vec![42.0; rows]
        } else {
            (0..rows).map(|_| rng.gen::<f64>()).collect()
        };
        columns.push(Column::new(format!("feature_{}", i).into(), values));
    }

    DataFrame::new(columns).unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Column names of a DataFrame as owned strings
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|s| s.to_string()).collect()
}

/// Assert that a DataFrame contains exactly these columns, in this order
pub fn assert_columns(df: &DataFrame, expected: &[&str]) {
    let actual = column_names(df);
    assert_eq!(
        actual, expected,
        "Column mismatch: expected {:?}, got {:?}",
        expected, actual
    );
}
