//! Forecast summaries and hold-out accuracy

use crate::data::SeriesValue;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastResult};
use forecast_math::{mean, round_to};
use serde::{Deserialize, Serialize};

/// Headline figures shown next to a forecast chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub model_name: String,
    /// Nominal confidence figure carried over from the forecast
    pub confidence_interval: f64,
    /// Mean of the point forecasts, rounded to a whole unit
    pub mean_prediction: f64,
    /// Change from the last observation to the last forecast, in percent
    /// with one decimal
    pub growth_percent: f64,
    /// Final point forecast
    pub last_prediction: f64,
    /// Hold-out accuracy, when a back-test was run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<ForecastAccuracy>,
}

impl ModelSummary {
    /// Attach back-test results
    pub fn with_accuracy(mut self, accuracy: ForecastAccuracy) -> Self {
        self.accuracy = Some(accuracy);
        self
    }
}

/// Summarize a forecast against the last observed value
pub fn summarize<P: SeriesValue>(
    model_name: &str,
    last_historical: f64,
    forecast: &ForecastResult<P>,
) -> Result<ModelSummary> {
    let values = forecast.prediction_values();
    let last_prediction = *values.last().ok_or_else(|| {
        ForecastError::InvalidInput(format!("{}: forecast has no steps", model_name))
    })?;
    if last_historical == 0.0 || !last_historical.is_finite() {
        return Err(ForecastError::InvalidInput(format!(
            "{}: growth is undefined for a last observation of {}",
            model_name, last_historical
        )));
    }

    let growth = (last_prediction - last_historical) / last_historical * 100.0;

    Ok(ModelSummary {
        model_name: model_name.to_string(),
        confidence_interval: forecast.confidence_interval(),
        mean_prediction: round_to(mean(&values)?, 0),
        growth_percent: round_to(growth, 1),
        last_prediction,
        accuracy: None,
    })
}

/// Hold-out error of a forecast, in sales units unless marked as a percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastAccuracy {
    pub mae: f64,
    pub mse: f64,
    pub rmse: f64,
    /// Percent; months with zero actual sales add nothing but still count
    pub mape: f64,
    /// Percent, 0..=200
    pub smape: f64,
}

impl std::fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MAE {:.2} | RMSE {:.2} | MAPE {:.2}% | SMAPE {:.2}%",
            self.mae, self.rmse, self.mape, self.smape
        )
    }
}

/// Score forecast months against the sales actually recorded for them
pub fn forecast_accuracy(forecast: &[f64], actual: &[f64]) -> Result<ForecastAccuracy> {
    if forecast.is_empty() || forecast.len() != actual.len() {
        return Err(ForecastError::InvalidInput(format!(
            "Cannot score {} forecast months against {} actual months",
            forecast.len(),
            actual.len()
        )));
    }

    let (mut abs_sum, mut sq_sum, mut pct_sum, mut sym_sum) = (0.0, 0.0, 0.0, 0.0);
    for (&predicted, &observed) in forecast.iter().zip(actual) {
        let miss = observed - predicted;
        abs_sum += miss.abs();
        sq_sum += miss * miss;

        if observed != 0.0 {
            pct_sum += miss.abs() / observed.abs();
        }

        let scale = observed.abs() + predicted.abs();
        if scale > 0.0 {
            sym_sum += 2.0 * miss.abs() / scale;
        }
    }

    let months = forecast.len() as f64;
    let mse = sq_sum / months;

    Ok(ForecastAccuracy {
        mae: abs_sum / months,
        mse,
        rmse: mse.sqrt(),
        mape: pct_sum / months * 100.0,
        smape: sym_sum / months * 100.0,
    })
}

/// What to judge two models on when picking one for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonMetric {
    /// Lower hold-out RMSE wins; both summaries need [`ModelSummary::with_accuracy`]
    Accuracy,
    /// Higher projected growth wins
    Growth,
    /// Narrower confidence interval wins
    Confidence,
}

/// Pick the better of two summaries under `metric`.
///
/// `second` wins ties, matching the comparison widget.
pub fn preferred_model<'a>(
    first: &'a ModelSummary,
    second: &'a ModelSummary,
    metric: ComparisonMetric,
) -> Result<&'a ModelSummary> {
    let first_wins = match metric {
        ComparisonMetric::Accuracy => match (&first.accuracy, &second.accuracy) {
            (Some(a), Some(b)) => a.rmse < b.rmse,
            _ => {
                return Err(ForecastError::InvalidInput(format!(
                    "Accuracy comparison needs back-test results for both {} and {}",
                    first.model_name, second.model_name
                )))
            }
        },
        ComparisonMetric::Growth => first.growth_percent > second.growth_percent,
        ComparisonMetric::Confidence => first.confidence_interval < second.confidence_interval,
    };

    Ok(if first_wins { first } else { second })
}

/// Hold back the last `holdout` observations, forecast them from the rest,
/// and score the forecast against what was held back.
pub fn backtest<M: ForecastModel>(
    model: &M,
    history: &[M::Observation],
    holdout: usize,
) -> Result<ForecastAccuracy> {
    if holdout == 0 {
        return Err(ForecastError::InvalidInput(
            "Hold-out window must be positive".to_string(),
        ));
    }
    if history.len() < holdout + model.min_observations() {
        return Err(ForecastError::InvalidInput(format!(
            "{}: {} observations cannot cover a hold-out of {} plus {} for fitting",
            model.name(),
            history.len(),
            holdout,
            model.min_observations()
        )));
    }

    let (train, test) = history.split_at(history.len() - holdout);
    let actual: Vec<f64> = test.iter().map(SeriesValue::value).collect();
    let forecast = model.forecast(train, holdout)?;

    let accuracy = forecast_accuracy(&forecast.prediction_values(), &actual)?;
    log::debug!(
        "{}: back-test over {} held-out steps, rmse={:.3}",
        model.name(),
        holdout,
        accuracy.rmse
    );

    Ok(accuracy)
}
