//! # Forecast Math
//!
//! Numeric building blocks shared by the forecasting simulators.
//! This crate knows nothing about dates or sales; it only works on
//! plain `f64` slices.

use thiserror::Error;

pub mod regression;
pub mod statistics;

pub use regression::LinearRegression;
pub use statistics::{difference, mean, population_std_dev, SummaryStats};

/// Errors that can occur in forecasting math
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for forecasting math operations
pub type Result<T> = std::result::Result<T, MathError>;

/// Round a value to a fixed number of decimal places.
///
/// Halves round away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Shorthand for [`round_to`] with two decimals, the precision every
/// forecast output is reported at.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
