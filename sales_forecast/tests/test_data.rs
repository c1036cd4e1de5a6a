use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sales_forecast::data::{add_months, following_months, month_start, sub_months, values_of};
use sales_forecast::{ForecastError, SalesDataLoader, TimePoint};
use std::io::Write;
use tempfile::NamedTempFile;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_time_point_parse() {
    let point = TimePoint::parse("2024-12-01", 42.5).unwrap();

    assert_eq!(point.date, date("2024-12-01"));
    assert_eq!(point.value, 42.5);
    assert_eq!(point.month0(), 11);

    assert!(matches!(
        TimePoint::parse("12/01/2024", 1.0),
        Err(ForecastError::DateError(_))
    ));
}

#[test]
fn test_time_point_json_shape() {
    let point = TimePoint::parse("2024-02-01", 12.0).unwrap();
    let json = serde_json::to_string(&point).unwrap();

    assert_eq!(json, r#"{"date":"2024-02-01","value":12.0}"#);
    assert_eq!(serde_json::from_str::<TimePoint>(&json).unwrap(), point);
}

#[test]
fn test_month_arithmetic() {
    assert_eq!(add_months(date("2024-01-15"), 1).unwrap(), date("2024-02-15"));
    assert_eq!(add_months(date("2024-11-01"), 3).unwrap(), date("2025-02-01"));
    assert_eq!(add_months(date("2024-01-31"), 1).unwrap(), date("2024-02-29"));
    assert_eq!(sub_months(date("2024-03-01"), 14).unwrap(), date("2023-01-01"));
    assert_eq!(month_start(date("2024-06-15")), date("2024-06-01"));
}

#[test]
fn test_following_months() {
    let months = following_months(date("2024-10-01"), 3).unwrap();

    assert_eq!(months, vec![date("2024-11-01"), date("2024-12-01"), date("2025-01-01")]);
    assert!(following_months(date("2024-10-01"), 0).unwrap().is_empty());
}

#[test]
fn test_values_of() {
    let points = vec![
        TimePoint::parse("2024-01-01", 1.0).unwrap(),
        TimePoint::parse("2024-02-01", 2.5).unwrap(),
    ];

    assert_eq!(values_of(&points), vec![1.0, 2.5]);
}

#[test]
fn test_load_csv_sorts_by_date() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,value").unwrap();
    writeln!(file, "2024-03-01,130").unwrap();
    writeln!(file, "2024-01-01, 110").unwrap();
    writeln!(file, "2024-02-01,120.5").unwrap();

    let series = SalesDataLoader::from_csv(file.path()).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series[0], TimePoint::new(date("2024-01-01"), 110.0));
    assert_eq!(series[1], TimePoint::new(date("2024-02-01"), 120.5));
    assert_eq!(series[2], TimePoint::new(date("2024-03-01"), 130.0));
}

#[test]
fn test_load_csv_errors() {
    let bad_date = "date,value\nnot-a-date,10\n";
    assert!(matches!(
        SalesDataLoader::from_reader(bad_date.as_bytes()),
        Err(ForecastError::CsvError(_))
    ));

    let bad_value = "date,value\n2024-01-01,NaN\n";
    assert!(matches!(
        SalesDataLoader::from_reader(bad_value.as_bytes()),
        Err(ForecastError::InvalidInput(_))
    ));

    assert!(matches!(
        SalesDataLoader::from_csv("/nonexistent/sales.csv"),
        Err(ForecastError::IoError(_))
    ));
}

#[test]
fn test_header_only_csv_loads_no_rows() {
    // Callers must not assume a last observation exists
    let history = SalesDataLoader::from_reader("date,value\n".as_bytes()).unwrap();

    assert!(history.is_empty());
    assert!(history.last().is_none());
}
