//! Dated sales observations and monthly calendar helpers

use crate::error::{ForecastError, Result};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Calendar format used for every date string the crate reads or writes
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One observed or forecast value at a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Observed or forecast value
    pub value: f64,
}

impl TimePoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Build a point from a `YYYY-MM-DD` string
    pub fn parse(date: &str, value: f64) -> Result<Self> {
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)?;
        Ok(Self { date, value })
    }

    /// Zero-indexed month of the point (January = 0, December = 11)
    pub fn month0(&self) -> u32 {
        self.date.month0()
    }
}

/// Anything that carries a single numeric reading.
///
/// Lets summaries and back-tests treat plain and dated forecasts alike.
pub trait SeriesValue {
    fn value(&self) -> f64;
}

impl SeriesValue for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

impl SeriesValue for TimePoint {
    fn value(&self) -> f64 {
        self.value
    }
}

/// Strip the dates from a dated series
pub fn values_of(points: &[TimePoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

/// Advance `date` by `months` calendar months.
///
/// Days past the end of the target month clamp to its last day
/// (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: usize) -> Result<NaiveDate> {
    let months = u32::try_from(months)
        .map_err(|_| ForecastError::DateError(format!("Month offset {} is too large", months)))?;

    date.checked_add_months(Months::new(months)).ok_or_else(|| {
        ForecastError::DateError(format!("{} + {} months is out of range", date, months))
    })
}

/// Move `date` back by `months` calendar months
pub fn sub_months(date: NaiveDate, months: usize) -> Result<NaiveDate> {
    let months = u32::try_from(months)
        .map_err(|_| ForecastError::DateError(format!("Month offset {} is too large", months)))?;

    date.checked_sub_months(Months::new(months)).ok_or_else(|| {
        ForecastError::DateError(format!("{} - {} months is out of range", date, months))
    })
}

/// The `count` month-steps that follow `last`: `last + 1 month`, `last + 2 months`, ...
pub fn following_months(last: NaiveDate, count: usize) -> Result<Vec<NaiveDate>> {
    (1..=count).map(|step| add_months(last, step)).collect()
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}

/// Loader for real sales aggregates stored as `date,value` CSV
#[derive(Debug)]
pub struct SalesDataLoader;

impl SalesDataLoader {
    /// Load a dated series from a CSV file with a `date,value` header
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<TimePoint>> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a dated series from any CSV source; rows come back sorted by date
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<TimePoint>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut points = Vec::new();
        for record in csv_reader.deserialize() {
            let point: TimePoint = record?;
            if !point.value.is_finite() {
                return Err(ForecastError::InvalidInput(format!(
                    "Non-finite value on {}",
                    point.date
                )));
            }
            points.push(point);
        }

        points.sort_by_key(|p| p.date);
        log::debug!("loaded {} sales observations", points.len());

        Ok(points)
    }
}
