//! ARIMA-style forecast simulation
//!
//! Produces chart-ready numbers shaped like an ARIMA forecast without
//! estimating any coefficients. Only the differencing order `d` changes the
//! output; `p` and `q` are carried so UI controls can bind to all three.

use crate::error::{ForecastError, Result};
use crate::models::{validate_history, ErrorBand, ForecastModel, ForecastResult};
use forecast_math::{difference, SummaryStats};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Weight on the previous value; the rest goes to the historical mean
const AR_WEIGHT: f64 = 0.7;
/// Fraction of the carried trend shed across the whole horizon
const TREND_DECAY: f64 = 0.1;
/// Seasonal amplitude as a fraction of the historical mean
const SEASONAL_AMPLITUDE: f64 = 0.15;

/// ARIMA order parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArimaParams {
    /// AR order. Accepted but not used in the arithmetic.
    pub p: usize,
    /// Differencing order
    pub d: usize,
    /// MA order. Accepted but not used in the arithmetic.
    pub q: usize,
}

impl Default for ArimaParams {
    fn default() -> Self {
        Self { p: 1, d: 1, q: 0 }
    }
}

impl ArimaParams {
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }
}

/// ARIMA-like simulator
#[derive(Debug, Clone)]
pub struct ArimaLike {
    /// Name of the model
    name: String,
    params: ArimaParams,
}

impl ArimaLike {
    /// Create a new simulator with the given order
    pub fn new(params: ArimaParams) -> Self {
        Self {
            name: format!("ARIMA({},{},{})", params.p, params.d, params.q),
            params,
        }
    }

    pub fn params(&self) -> ArimaParams {
        self.params
    }
}

impl Default for ArimaLike {
    fn default() -> Self {
        Self::new(ArimaParams::default())
    }
}

impl ForecastModel for ArimaLike {
    type Observation = f64;
    type Point = f64;

    fn name(&self) -> &str {
        &self.name
    }

    fn min_observations(&self) -> usize {
        // One difference value must survive `d` passes
        self.params.d + 1
    }

    fn forecast(&self, history: &[f64], periods: usize) -> Result<ForecastResult<f64>> {
        validate_history(&self.name, history, self.min_observations(), periods)?;

        let d = self.params.d;
        let stats = SummaryStats::from_values(history)?;
        let differenced = difference(history, d)?;

        let mut last_value = *history
            .last()
            .ok_or_else(|| ForecastError::InvalidInput("historical series is empty".to_string()))?;
        let last_diff = if d > 0 {
            differenced.last().copied().unwrap_or(0.0)
        } else {
            0.0
        };

        if stats.std_dev == 0.0 {
            log::warn!("{}: history has zero variance, bands will have zero width", self.name);
        }
        log::debug!(
            "{}: n={} mean={:.3} std={:.3} last_diff={:.3} periods={}",
            self.name,
            history.len(),
            stats.mean,
            stats.std_dev,
            last_diff,
            periods
        );

        let band = ErrorBand::from_std_dev(stats.std_dev);
        let mut predictions = Vec::with_capacity(periods);
        let mut lower_bounds = Vec::with_capacity(periods);
        let mut upper_bounds = Vec::with_capacity(periods);

        for i in 0..periods {
            let step = i as f64;
            let ar = AR_WEIGHT * last_value + (1.0 - AR_WEIGHT) * stats.mean;
            let trend = if d > 0 {
                last_diff * (1.0 - TREND_DECAY * step / periods as f64)
            } else {
                0.0
            };
            let seasonal = SEASONAL_AMPLITUDE * stats.mean * (PI * step / 6.0).sin();
            let prediction = ar + trend + seasonal;

            let (lower, point, upper) = band.around(prediction, i);
            lower_bounds.push(lower);
            predictions.push(point);
            upper_bounds.push(upper);

            last_value = prediction;
        }

        ForecastResult::new(
            predictions,
            lower_bounds,
            upper_bounds,
            band.confidence_interval(),
        )
    }
}

/// Forecast `periods` steps of a plain numeric series with the ARIMA-like
/// simulator.
pub fn simulate_arima_like(
    series: &[f64],
    periods: usize,
    params: ArimaParams,
) -> Result<ForecastResult<f64>> {
    ArimaLike::new(params).forecast(series, periods)
}
