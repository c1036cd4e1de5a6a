//! Merging history and forecasts into rows for the charting component

use crate::data::TimePoint;
use crate::error::{ForecastError, Result};
use crate::models::ForecastResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One x-axis position of a single-model prediction chart.
///
/// Missing fields are left out of the JSON, which the chart draws as gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRow {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
}

impl ChartRow {
    /// Row for an observed value
    pub fn actual(point: &TimePoint) -> Self {
        Self {
            date: point.date,
            actual: Some(point.value),
            predicted: None,
            lower_bound: None,
            upper_bound: None,
        }
    }

    /// Row for one forecast step
    pub fn forecast(prediction: &TimePoint, lower: &TimePoint, upper: &TimePoint) -> Self {
        Self {
            date: prediction.date,
            actual: None,
            predicted: Some(prediction.value),
            lower_bound: Some(lower.value),
            upper_bound: Some(upper.value),
        }
    }
}

/// Merge history and one forecast into date-ordered chart rows.
///
/// History rows come first, then forecast rows, and the whole sequence is
/// stably sorted by date, so rows sharing a date keep that order. Each
/// forecast row takes its date from `predictions`.
pub fn format_for_chart(
    historical: &[TimePoint],
    predictions: &[TimePoint],
    lower_bounds: &[TimePoint],
    upper_bounds: &[TimePoint],
) -> Result<Vec<ChartRow>> {
    check_lengths(predictions.len(), lower_bounds.len(), upper_bounds.len())?;

    let mut rows: Vec<ChartRow> = historical.iter().map(ChartRow::actual).collect();
    rows.extend(
        predictions
            .iter()
            .zip(lower_bounds)
            .zip(upper_bounds)
            .map(|((p, l), u)| ChartRow::forecast(p, l, u)),
    );
    rows.sort_by_key(|row| row.date);

    Ok(rows)
}

/// [`format_for_chart`] over a dated forecast result
pub fn format_forecast(
    historical: &[TimePoint],
    forecast: &ForecastResult<TimePoint>,
) -> Result<Vec<ChartRow>> {
    format_for_chart(
        historical,
        forecast.predictions(),
        forecast.lower_bounds(),
        forecast.upper_bounds(),
    )
}

/// One x-axis position of the side-by-side model comparison chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arima_predicted: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arima_lower_bound: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arima_upper_bound: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prophet_predicted: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prophet_lower_bound: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prophet_upper_bound: Option<f64>,
}

/// History followed by one row per step carrying both models' forecasts.
///
/// Step rows are dated by the ARIMA forecast. Both forecasts must cover the
/// same number of steps.
pub fn format_comparison(
    historical: &[TimePoint],
    arima: &ForecastResult<TimePoint>,
    prophet: &ForecastResult<TimePoint>,
) -> Result<Vec<ComparisonRow>> {
    if arima.horizons() != prophet.horizons() {
        return Err(ForecastError::InvalidInput(format!(
            "ARIMA forecast has {} steps but Prophet forecast has {}",
            arima.horizons(),
            prophet.horizons()
        )));
    }

    let mut rows: Vec<ComparisonRow> = historical
        .iter()
        .map(|point| ComparisonRow {
            date: point.date,
            actual: Some(point.value),
            arima_predicted: None,
            arima_lower_bound: None,
            arima_upper_bound: None,
            prophet_predicted: None,
            prophet_lower_bound: None,
            prophet_upper_bound: None,
        })
        .collect();

    for ((a_low, a_pred, a_up), (p_low, p_pred, p_up)) in arima.steps().zip(prophet.steps()) {
        rows.push(ComparisonRow {
            date: a_pred.date,
            actual: None,
            arima_predicted: Some(a_pred.value),
            arima_lower_bound: Some(a_low.value),
            arima_upper_bound: Some(a_up.value),
            prophet_predicted: Some(p_pred.value),
            prophet_lower_bound: Some(p_low.value),
            prophet_upper_bound: Some(p_up.value),
        });
    }

    Ok(rows)
}

fn check_lengths(predictions: usize, lower: usize, upper: usize) -> Result<()> {
    if predictions != lower || predictions != upper {
        return Err(ForecastError::InvalidInput(format!(
            "Predictions ({}), lower bounds ({}) and upper bounds ({}) must have equal length",
            predictions, lower, upper
        )));
    }
    Ok(())
}
