//! # Dealer Forecast
//!
//! Umbrella crate for the dealership prediction dashboard.
//!
//! - [`math`]: statistics, differencing and least-squares helpers
//! - [`forecast`]: history generation, forecast simulators and chart data
//!
//! ## Example
//!
//! ```
//! use dealer_forecast_workspace::forecast::{simulate_arima_like, ArimaParams};
//!
//! let result = simulate_arima_like(&[100.0, 102.0, 98.0, 105.0, 110.0, 108.0], 3, ArimaParams::default())?;
//! assert_eq!(result.horizons(), 3);
//! # Ok::<(), dealer_forecast_workspace::forecast::ForecastError>(())
//! ```

pub use forecast_math as math;
pub use sales_forecast as forecast;

#[cfg(test)]
mod tests {
    use super::forecast::{simulate_prophet_like, TimePoint};
    use super::math::round2;

    #[test]
    fn test_facade_reaches_both_crates() {
        let history = vec![
            TimePoint::parse("2024-01-01", 10.0).unwrap(),
            TimePoint::parse("2024-02-01", 12.0).unwrap(),
        ];
        let result = simulate_prophet_like(&history, 2).unwrap();

        assert_eq!(result.horizons(), 2);
        assert_eq!(round2(result.confidence_interval()), 1.96);
    }
}
