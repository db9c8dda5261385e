use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::{NamedTempFile, TempDir};

use openmeteo_aggregator::cli::{read_small_file, run_aggregate};
use openmeteo_aggregator::AggregateError;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Fixture export: 3 preamble lines + 1 header + data rows, the Open-Meteo
/// hourly CSV shape.
fn write_export(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "latitude,52.52").unwrap();
    writeln!(file, "utc_offset_seconds,0").unwrap();
    writeln!(file).unwrap();
    writeln!(
        file,
        "time,temperature_2m,relative_humidity_2m,pressure_msl,rain,wind_speed_10m,wind_direction_10m,is_day,direct_normal_irradiance_instant"
    )
    .unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}

/// Two DAY and two NIGHT rows across 2023-01-01 and 2023-01-02.
fn standard_export() -> NamedTempFile {
    write_export(&[
        "2023-01-01T12:00,12.5,50,1010.0,0,15.0,200,1,600.0",
        "2023-01-01T23:00,4.0,80,1012.0,0,10.0,180,0,0.0",
        "2023-01-02T12:00,10.8,52,1011.0,0,14.0,210,1,580.0",
        "2023-01-02T23:00,3.1,82,1013.0,0,9.0,170,0,0.0",
    ])
}

fn aggregate(path: &Path, start: &str, end: &str, metric: &str, sel: &str, agg: &str) -> String {
    run_aggregate(path, date(start), date(end), metric, sel, agg).unwrap()
}

#[test]
fn test_day_sum_over_single_day() {
    let file = standard_export();
    let out = aggregate(
        file.path(),
        "2023-01-01",
        "2023-01-02",
        "temperature_2m",
        "DAY",
        "SUM",
    );
    assert_eq!(out, "12.5 °C");
}

#[test]
fn test_end_date_is_exclusive() {
    let file = standard_export();
    // Widening the range by one day pulls in the second DAY row.
    let out = aggregate(
        file.path(),
        "2023-01-01",
        "2023-01-03",
        "temperature_2m",
        "DAY",
        "SUM",
    );
    assert_eq!(out, "23.3 °C");
}

#[test]
fn test_night_selector() {
    let file = standard_export();
    let out = aggregate(
        file.path(),
        "2023-01-01",
        "2023-01-03",
        "temperature_2m",
        "NIGHT",
        "MIN",
    );
    assert_eq!(out, "3.1 °C");
}

#[test]
fn test_avg_prints_fifteen_fractional_digits() {
    let file = standard_export();
    let out = aggregate(
        file.path(),
        "2023-01-01",
        "2023-01-03",
        "temperature_2m",
        "DAY",
        "AVG",
    );
    assert_eq!(out, "11.650000000000000 °C");
}

#[test]
fn test_aggregations_are_mutually_consistent() {
    let file = standard_export();
    let args = ("2023-01-01", "2023-01-03", "temperature_2m", "DAY");

    let min: f64 = aggregate(file.path(), args.0, args.1, args.2, args.3, "MIN")
        .strip_suffix(" °C")
        .unwrap()
        .parse()
        .unwrap();
    let max: f64 = aggregate(file.path(), args.0, args.1, args.2, args.3, "MAX")
        .strip_suffix(" °C")
        .unwrap()
        .parse()
        .unwrap();
    let avg: f64 = aggregate(file.path(), args.0, args.1, args.2, args.3, "AVG")
        .strip_suffix(" °C")
        .unwrap()
        .parse()
        .unwrap();
    let sum: f64 = aggregate(file.path(), args.0, args.1, args.2, args.3, "SUM")
        .strip_suffix(" °C")
        .unwrap()
        .parse()
        .unwrap();

    assert!(min <= avg && avg <= max);
    assert!((sum - avg * 2.0).abs() < 1e-9);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let file = standard_export();
    let first = aggregate(
        file.path(),
        "2023-01-01",
        "2023-01-03",
        "pressure_msl",
        "DAY",
        "AVG",
    );
    let second = aggregate(
        file.path(),
        "2023-01-01",
        "2023-01-03",
        "pressure_msl",
        "DAY",
        "AVG",
    );
    assert_eq!(first, second);
}

#[test]
fn test_empty_match_falls_back_to_zero() {
    let file = standard_export();
    let out = aggregate(
        file.path(),
        "2020-01-01",
        "2020-01-02",
        "temperature_2m",
        "DAY",
        "SUM",
    );
    assert_eq!(out, "0 °C");

    let out = aggregate(
        file.path(),
        "2020-01-01",
        "2020-01-02",
        "temperature_2m",
        "DAY",
        "AVG",
    );
    assert_eq!(out, "0.000000000000000 °C");
}

#[test]
fn test_large_sum_uses_scientific_notation() {
    let file = write_export(&[
        "2023-01-01T12:00,12.5,50,1010.0,0,15.0,200,1,123456789.0",
    ]);
    let out = aggregate(
        file.path(),
        "2023-01-01",
        "2023-01-02",
        "direct_normal_irradiance_instant",
        "DAY",
        "SUM",
    );
    assert_eq!(out, "1.2345679E8 W/m²");
}

#[test]
fn test_unknown_metric_exits_2() {
    let file = standard_export();
    let err = run_aggregate(
        file.path(),
        date("2023-01-01"),
        date("2023-01-02"),
        "humidity_2m",
        "DAY",
        "SUM",
    )
    .unwrap_err();
    assert!(matches!(err, AggregateError::UnknownMetric(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_unknown_aggregation_exits_4() {
    let file = standard_export();
    let err = run_aggregate(
        file.path(),
        date("2023-01-01"),
        date("2023-01-02"),
        "temperature_2m",
        "DAY",
        "MEDIAN",
    )
    .unwrap_err();
    assert!(matches!(err, AggregateError::UnknownAggregation(_)));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_unknown_selector_is_usage_error() {
    let file = standard_export();
    let err = run_aggregate(
        file.path(),
        date("2023-01-01"),
        date("2023-01-02"),
        "temperature_2m",
        "DUSK",
        "SUM",
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_missing_file_exits_5() {
    let err = run_aggregate(
        Path::new("/nonexistent/weather.csv"),
        date("2023-01-01"),
        date("2023-01-02"),
        "temperature_2m",
        "DAY",
        "SUM",
    )
    .unwrap_err();
    assert!(matches!(err, AggregateError::Io(_)));
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn test_bad_request_is_rejected_before_io() {
    // Eager validation: an unknown metric wins over a missing file.
    let err = run_aggregate(
        Path::new("/nonexistent/weather.csv"),
        date("2023-01-01"),
        date("2023-01-02"),
        "humidity_2m",
        "DAY",
        "SUM",
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_malformed_row_aborts() {
    let file = write_export(&[
        "2023-01-01T12:00,12.5,50,1010.0,0,15.0,200,1,600.0",
        "garbage line without commas enough",
    ]);
    let err = run_aggregate(
        file.path(),
        date("2023-01-01"),
        date("2023-01-02"),
        "temperature_2m",
        "DAY",
        "SUM",
    )
    .unwrap_err();
    assert!(matches!(err, AggregateError::MalformedRow { .. }));
}

#[test]
fn test_cat_prints_small_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "hello weather").unwrap();
    assert_eq!(read_small_file(file.path()).unwrap(), "hello weather");
}

#[test]
fn test_cat_rejects_missing_file() {
    let err = read_small_file(Path::new("/nonexistent/notes.txt")).unwrap_err();
    assert!(matches!(err, AggregateError::FileNotFound(_)));
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn test_cat_rejects_directory() {
    let dir = TempDir::new().unwrap();
    let err = read_small_file(dir.path()).unwrap_err();
    assert!(matches!(err, AggregateError::NotAFile(_)));
    assert_eq!(err.exit_code(), 6);
}

#[test]
fn test_cat_rejects_oversized_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&vec![b'x'; 3073]).unwrap();
    let err = read_small_file(file.path()).unwrap_err();
    assert!(matches!(err, AggregateError::FileTooLarge { size: 3073, .. }));
    assert_eq!(err.exit_code(), 7);
}

#[test]
fn test_cat_accepts_file_at_size_cap() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&vec![b'y'; 3072]).unwrap();
    assert_eq!(read_small_file(file.path()).unwrap().len(), 3072);
}
