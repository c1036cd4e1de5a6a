//! Synthetic monthly sales history for demos
//!
//! Each month is `base + trend * i + seasonal(month) + noise`, clamped at
//! zero. The random source is passed in, so a seeded generator gives a
//! reproducible series.

use crate::data::{add_months, month_start, sub_months, TimePoint};
use crate::error::Result;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use std::ops::Range;

/// Shape of the synthetic sales curve
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalSeriesGenerator {
    /// Level of the first month before trend, season and noise
    pub base: i64,
    /// Units added per elapsed month
    pub trend_per_month: i64,
    /// Bump for zero-indexed months 5..=7
    pub summer_bump: i64,
    /// Bump for December
    pub december_bump: i64,
    /// Integer noise drawn uniformly from this half-open range
    pub noise: Range<i64>,
}

impl Default for HistoricalSeriesGenerator {
    fn default() -> Self {
        Self {
            base: 120,
            trend_per_month: 2,
            summer_bump: 25,
            december_bump: 40,
            noise: -10..10,
        }
    }
}

impl HistoricalSeriesGenerator {
    /// Seasonal offset for a zero-indexed month
    pub fn seasonal(&self, month0: u32) -> i64 {
        match month0 {
            5..=7 => self.summer_bump,
            11 => self.december_bump,
            _ => 0,
        }
    }

    /// Generate `months` observations, one per month, the last one dated the
    /// first day of the month containing `today`.
    pub fn generate<R: Rng>(
        &self,
        months: usize,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<TimePoint>> {
        if months == 0 {
            log::warn!("requested zero months of history; returning an empty series");
            return Ok(Vec::new());
        }

        let start = sub_months(month_start(today), months - 1)?;
        let mut series = Vec::with_capacity(months);

        for i in 0..months {
            let date = add_months(start, i)?;
            let trend = self.trend_per_month * i as i64;
            let noise = if self.noise.is_empty() {
                0
            } else {
                rng.gen_range(self.noise.clone())
            };
            let value = self.base + trend + self.seasonal(date.month0()) + noise;

            series.push(TimePoint::new(date, value.max(0) as f64));
        }

        log::debug!(
            "generated {} months of history ending {}",
            series.len(),
            series.last().map(|p| p.date).unwrap_or(today)
        );

        Ok(series)
    }
}

/// Generate `months` of demo sales history ending at the month of `today`
/// using the default curve.
pub fn generate_historical_series<R: Rng>(
    months: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<TimePoint>> {
    HistoricalSeriesGenerator::default().generate(months, today, rng)
}
