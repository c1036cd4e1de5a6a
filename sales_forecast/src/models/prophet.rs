//! Prophet-style forecast simulation
//!
//! Linear trend from an OLS fit, plus a yearly sine keyed to the calendar
//! month and a December holiday lift.

use crate::data::{following_months, values_of, TimePoint};
use crate::error::{ForecastError, Result};
use crate::models::{validate_history, ErrorBand, ForecastModel, ForecastResult};
use chrono::Datelike;
use forecast_math::{LinearRegression, SummaryStats};
use std::f64::consts::PI;

/// Seasonal amplitude as a fraction of the historical mean
const SEASONAL_AMPLITUDE: f64 = 0.25;
/// December lift as a fraction of the historical mean
const HOLIDAY_LIFT: f64 = 0.2;
/// Zero-indexed month that receives the holiday lift
const HOLIDAY_MONTH0: u32 = 11;

/// Prophet-like simulator over dated observations
#[derive(Debug, Clone)]
pub struct ProphetLike {
    name: String,
}

impl ProphetLike {
    pub fn new() -> Self {
        Self {
            name: "Prophet".to_string(),
        }
    }
}

impl Default for ProphetLike {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for ProphetLike {
    type Observation = TimePoint;
    type Point = TimePoint;

    fn name(&self) -> &str {
        &self.name
    }

    fn min_observations(&self) -> usize {
        2
    }

    fn forecast(&self, history: &[TimePoint], periods: usize) -> Result<ForecastResult<TimePoint>> {
        let values = values_of(history);
        validate_history(&self.name, &values, self.min_observations(), periods)?;

        let stats = SummaryStats::from_values(&values)?;
        let trend_line = LinearRegression::fit(&values)?;
        let last_date = history
            .last()
            .map(|p| p.date)
            .ok_or_else(|| ForecastError::InvalidInput("historical series is empty".to_string()))?;

        if stats.std_dev == 0.0 {
            log::warn!("{}: history has zero variance, bands will have zero width", self.name);
        }
        log::debug!(
            "{}: n={} slope={:.3} intercept={:.3} mean={:.3} std={:.3} periods={}",
            self.name,
            values.len(),
            trend_line.slope(),
            trend_line.intercept(),
            stats.mean,
            stats.std_dev,
            periods
        );

        let n = values.len();
        let band = ErrorBand::from_std_dev(stats.std_dev);
        let mut predictions = Vec::with_capacity(periods);
        let mut lower_bounds = Vec::with_capacity(periods);
        let mut upper_bounds = Vec::with_capacity(periods);

        for (i, date) in following_months(last_date, periods)?.into_iter().enumerate() {
            let month0 = date.month0();
            let trend = trend_line.predict((n + i) as f64);
            let seasonal = SEASONAL_AMPLITUDE * stats.mean * (PI * month0 as f64 / 6.0).sin();
            let holiday = if month0 == HOLIDAY_MONTH0 {
                HOLIDAY_LIFT * stats.mean
            } else {
                0.0
            };
            let prediction = trend + seasonal + holiday;

            let (lower, point, upper) = band.around(prediction, i);
            lower_bounds.push(TimePoint::new(date, lower));
            predictions.push(TimePoint::new(date, point));
            upper_bounds.push(TimePoint::new(date, upper));
        }

        ForecastResult::new(
            predictions,
            lower_bounds,
            upper_bounds,
            band.confidence_interval(),
        )
    }
}

/// Forecast `periods` months past the end of a dated series with the
/// Prophet-like simulator.
pub fn simulate_prophet_like(
    series: &[TimePoint],
    periods: usize,
) -> Result<ForecastResult<TimePoint>> {
    ProphetLike::new().forecast(series, periods)
}
