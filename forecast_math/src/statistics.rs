//! Descriptive statistics
//!
//! Contains:
//! - Mean and population standard deviation
//! - Successive differencing (the "I" in ARIMA)

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Arithmetic mean of a non-empty series
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot take the mean of an empty series".to_string(),
        ));
    }

    Ok(values.iter().mean())
}

/// Population (divide-by-n) standard deviation of a non-empty series.
///
/// A single observation has a standard deviation of zero.
pub fn population_std_dev(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot take the standard deviation of an empty series".to_string(),
        ));
    }
    if values.len() == 1 {
        return Ok(0.0);
    }

    Ok(values.iter().population_std_dev())
}

/// Apply first-order differencing `order` times.
///
/// Each pass maps `series[i + 1] - series[i]`, so the output is `order`
/// elements shorter than the input. `order == 0` returns the series as-is.
pub fn difference(values: &[f64], order: usize) -> Result<Vec<f64>> {
    if values.len() <= order {
        return Err(MathError::InsufficientData(format!(
            "Differencing of order {} needs at least {} observations, got {}",
            order,
            order + 1,
            values.len()
        )));
    }

    let mut series = values.to_vec();
    for _ in 0..order {
        series = series.windows(2).map(|w| w[1] - w[0]).collect();
    }

    Ok(series)
}

/// Location and spread of a series, computed once per forecast call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl SummaryStats {
    /// Compute mean and population standard deviation of `values`
    pub fn from_values(values: &[f64]) -> Result<Self> {
        Ok(Self {
            mean: mean(values)?,
            std_dev: population_std_dev(values)?,
        })
    }
}
