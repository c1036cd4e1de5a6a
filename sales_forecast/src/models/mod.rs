//! Forecasting models for monthly sales series
//!
//! Both simulators share the same output shape and the same uncertainty
//! band: a nominal `1.96 * std` confidence figure and a per-step margin of
//! `1.5 * std * sqrt(step + 1)`. Neither is a fitted statistical model; the
//! band is derived from the spread of the raw history, not from forecast
//! residuals.

use crate::data::{following_months, SeriesValue, TimePoint};
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use forecast_math::round2;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub mod arima;
pub mod prophet;

/// z-score of a two-sided 95% normal interval
pub const Z_95: f64 = 1.96;

/// Multiplier applied to the history's standard deviation for the step-one margin
pub const ERROR_MARGIN_MULTIPLIER: f64 = 1.5;

/// Forecast result with a lower and upper bound per step.
///
/// `predictions`, `lower_bounds` and `upper_bounds` always have the same
/// length, and `lower_bounds[i] <= predictions[i] <= upper_bounds[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult<P> {
    predictions: Vec<P>,
    lower_bounds: Vec<P>,
    upper_bounds: Vec<P>,
    confidence_interval: f64,
}

impl<P> ForecastResult<P> {
    /// Create a new forecast result, checking the three sequences line up
    pub fn new(
        predictions: Vec<P>,
        lower_bounds: Vec<P>,
        upper_bounds: Vec<P>,
        confidence_interval: f64,
    ) -> Result<Self> {
        if predictions.len() != lower_bounds.len() || predictions.len() != upper_bounds.len() {
            return Err(ForecastError::InvalidInput(format!(
                "Predictions ({}), lower bounds ({}) and upper bounds ({}) must have equal length",
                predictions.len(),
                lower_bounds.len(),
                upper_bounds.len()
            )));
        }

        Ok(Self {
            predictions,
            lower_bounds,
            upper_bounds,
            confidence_interval,
        })
    }

    pub fn predictions(&self) -> &[P] {
        &self.predictions
    }

    pub fn lower_bounds(&self) -> &[P] {
        &self.lower_bounds
    }

    pub fn upper_bounds(&self) -> &[P] {
        &self.upper_bounds
    }

    /// Nominal 95% interval half-width, `1.96 * std` of the history.
    ///
    /// Not a multi-step prediction interval; kept for display compatibility.
    pub fn confidence_interval(&self) -> f64 {
        self.confidence_interval
    }

    /// Number of periods forecasted
    pub fn horizons(&self) -> usize {
        self.predictions.len()
    }

    /// Iterate `(lower, prediction, upper)` per step
    pub fn steps(&self) -> impl Iterator<Item = (&P, &P, &P)> {
        self.lower_bounds
            .iter()
            .zip(self.predictions.iter())
            .zip(self.upper_bounds.iter())
            .map(|((lower, prediction), upper)| (lower, prediction, upper))
    }
}

impl<P: SeriesValue> ForecastResult<P> {
    /// Point forecasts as plain numbers
    pub fn prediction_values(&self) -> Vec<f64> {
        self.predictions.iter().map(SeriesValue::value).collect()
    }

    /// Width of the band at each step
    pub fn band_widths(&self) -> Vec<f64> {
        self.steps()
            .map(|(lower, _, upper)| upper.value() - lower.value())
            .collect()
    }
}

impl<P: Serialize> ForecastResult<P> {
    /// Serialize to the JSON shape the dashboard widgets consume
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl ForecastResult<f64> {
    /// Stamp each step with a calendar month, step `i` landing on
    /// `last_date + (i + 1)` months.
    pub fn with_monthly_dates(&self, last_date: NaiveDate) -> Result<ForecastResult<TimePoint>> {
        let dates = following_months(last_date, self.horizons())?;
        let stamp = |values: &[f64]| -> Vec<TimePoint> {
            dates
                .iter()
                .zip(values)
                .map(|(&date, &value)| TimePoint::new(date, value))
                .collect()
        };

        ForecastResult::new(
            stamp(&self.predictions),
            stamp(&self.lower_bounds),
            stamp(&self.upper_bounds),
            self.confidence_interval,
        )
    }
}

/// Forecast model over a historical series
pub trait ForecastModel: Debug + Clone {
    /// One historical input element
    type Observation: SeriesValue + Clone;
    /// One forecast output element
    type Point: SeriesValue + Clone;

    /// Name of the model
    fn name(&self) -> &str;

    /// Fewest observations the model accepts
    fn min_observations(&self) -> usize;

    /// Forecast `periods` steps past the end of `history`
    fn forecast(
        &self,
        history: &[Self::Observation],
        periods: usize,
    ) -> Result<ForecastResult<Self::Point>>;
}

/// Reject input that would otherwise turn into NaN further down the chart
/// pipeline.
pub(crate) fn validate_history(
    model: &str,
    values: &[f64],
    min_observations: usize,
    periods: usize,
) -> Result<()> {
    if values.is_empty() {
        return Err(ForecastError::InvalidInput(format!(
            "{}: historical series is empty",
            model
        )));
    }
    if periods == 0 {
        return Err(ForecastError::InvalidInput(format!(
            "{}: forecast horizon must be positive",
            model
        )));
    }
    if values.len() < min_observations {
        return Err(ForecastError::InvalidInput(format!(
            "{}: needs at least {} observations, got {}",
            model,
            min_observations,
            values.len()
        )));
    }
    if let Some(position) = values.iter().position(|v| !v.is_finite()) {
        return Err(ForecastError::InvalidInput(format!(
            "{}: observation {} is not a finite number",
            model, position
        )));
    }

    Ok(())
}

/// Uncertainty band shared by both simulators
#[derive(Debug, Clone, Copy)]
pub(crate) struct ErrorBand {
    confidence_interval: f64,
    error_margin: f64,
}

impl ErrorBand {
    pub(crate) fn from_std_dev(std_dev: f64) -> Self {
        Self {
            confidence_interval: Z_95 * std_dev,
            error_margin: ERROR_MARGIN_MULTIPLIER * std_dev,
        }
    }

    /// Rounded confidence figure reported alongside the forecast
    pub(crate) fn confidence_interval(&self) -> f64 {
        round2(self.confidence_interval)
    }

    /// `(lower, prediction, upper)` for zero-based `step`, each rounded to
    /// cents from the unrounded prediction and margin.
    pub(crate) fn around(&self, prediction: f64, step: usize) -> (f64, f64, f64) {
        let margin = self.error_margin * ((step + 1) as f64).sqrt();

        (
            round2(prediction - margin),
            round2(prediction),
            round2(prediction + margin),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_widens_with_step() {
        let band = ErrorBand::from_std_dev(4.0);
        let (l0, p0, u0) = band.around(100.0, 0);
        let (l3, _, u3) = band.around(100.0, 3);

        assert_eq!((l0, p0, u0), (94.0, 100.0, 106.0));
        assert_eq!((l3, u3), (88.0, 112.0));
    }

    #[test]
    fn test_zero_std_gives_flat_band() {
        let band = ErrorBand::from_std_dev(0.0);
        assert_eq!(band.around(12.344, 5), (12.34, 12.34, 12.34));
        assert_eq!(band.confidence_interval(), 0.0);
    }

    #[test]
    fn test_bounds_round_from_unrounded_values() {
        // margin is 0.006; rounding it to 0.01 first would drop the lower bound to 189.31
        let band = ErrorBand::from_std_dev(0.004);
        assert_eq!(band.around(189.3249, 0), (189.32, 189.32, 189.33));
    }

    #[test]
    fn test_validate_history() {
        assert!(validate_history("m", &[1.0, 2.0], 2, 1).is_ok());
        assert!(validate_history("m", &[], 1, 1).is_err());
        assert!(validate_history("m", &[1.0], 1, 0).is_err());
        assert!(validate_history("m", &[1.0], 2, 3).is_err());
        assert!(validate_history("m", &[1.0, f64::NAN], 1, 3).is_err());
    }
}
