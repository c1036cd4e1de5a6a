//! Forecast run configuration

use crate::error::{ForecastError, Result};
use crate::models::arima::ArimaParams;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for one "regenerate" of the prediction widgets.
///
/// Every field has a default, so a partial JSON document is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Months of synthetic history to generate
    pub history_months: usize,
    /// Forecast horizon in months
    pub periods: usize,
    /// ARIMA order bound to the UI controls
    pub arima: ArimaParams,
    /// Seed for the history generator; entropy when absent
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            history_months: 24,
            periods: 6,
            arima: ArimaParams::default(),
            seed: None,
        }
    }
}

impl ForecastConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        log::debug!("loading forecast config from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Check the settings can drive both simulators
    pub fn validate(&self) -> Result<()> {
        if self.history_months < 2 {
            return Err(ForecastError::ConfigError(format!(
                "history_months must be at least 2, got {}",
                self.history_months
            )));
        }
        if self.periods == 0 {
            return Err(ForecastError::ConfigError(
                "periods must be positive".to_string(),
            ));
        }
        if self.arima.d >= self.history_months {
            return Err(ForecastError::ConfigError(format!(
                "differencing order {} needs more than {} months of history",
                self.arima.d, self.history_months
            )));
        }
        Ok(())
    }

    /// Random source for the history generator
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
