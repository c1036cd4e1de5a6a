//! # Sales Forecast
//!
//! Chart data for the dealership prediction dashboard: synthetic monthly
//! sales history plus two lightweight forecast simulators shaped like
//! ARIMA and Prophet output.
//!
//! ## Features
//!
//! - Seedable synthetic history (trend, summer and December lift, noise)
//! - ARIMA-like and Prophet-like forecasts with widening uncertainty bands
//! - Chart row merging for single-model and side-by-side comparison charts
//! - Model summaries and hold-out back-testing
//! - CSV loading for real monthly aggregates
//!
//! The simulators are deterministic arithmetic over the history's mean,
//! spread and trend. They estimate no parameters, and their bands are a
//! display aid rather than a statistical prediction interval.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use sales_forecast::{
//!     format_forecast, generate_historical_series, simulate_arima_like, simulate_prophet_like,
//!     values_of, ArimaParams,
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let history = generate_historical_series(24, today, &mut rng)?;
//!
//! let arima = simulate_arima_like(&values_of(&history), 6, ArimaParams::default())?;
//! assert_eq!(arima.horizons(), 6);
//!
//! let prophet = simulate_prophet_like(&history, 6)?;
//! let rows = format_forecast(&history, &prophet)?;
//! assert_eq!(rows.len(), 30);
//! # Ok::<(), sales_forecast::ForecastError>(())
//! ```

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;

// Re-export commonly used types
pub use crate::chart::{format_comparison, format_for_chart, format_forecast, ChartRow, ComparisonRow};
pub use crate::config::ForecastConfig;
pub use crate::data::{values_of, SalesDataLoader, SeriesValue, TimePoint};
pub use crate::error::{ForecastError, Result};
pub use crate::generator::{generate_historical_series, HistoricalSeriesGenerator};
pub use crate::metrics::{
    backtest, forecast_accuracy, preferred_model, summarize, ComparisonMetric, ForecastAccuracy,
    ModelSummary,
};
pub use crate::models::arima::{simulate_arima_like, ArimaLike, ArimaParams};
pub use crate::models::prophet::{simulate_prophet_like, ProphetLike};
pub use crate::models::{ForecastModel, ForecastResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
