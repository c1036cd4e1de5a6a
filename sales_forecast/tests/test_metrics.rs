use approx::assert_relative_eq;
use sales_forecast::metrics::{
    backtest, forecast_accuracy, preferred_model, summarize, ComparisonMetric, ModelSummary,
};
use sales_forecast::models::ForecastResult;
use sales_forecast::{ArimaLike, ArimaParams, ForecastError, ProphetLike, TimePoint};

#[test]
fn test_forecast_accuracy() {
    let forecast = [10.0, 20.0, 30.0, 40.0];
    let actual = [12.0, 18.0, 33.0, 40.0];

    let accuracy = forecast_accuracy(&forecast, &actual).unwrap();

    assert_relative_eq!(accuracy.mae, 1.75);
    assert_relative_eq!(accuracy.mse, 4.25);
    assert_relative_eq!(accuracy.rmse, 4.25f64.sqrt());
    // (2/12 + 2/18 + 3/33) * 100 / 4
    assert_relative_eq!(accuracy.mape, (2.0 / 12.0 + 2.0 / 18.0 + 3.0 / 33.0) * 25.0, epsilon = 1e-9);
    assert!(accuracy.smape > 0.0);

    let display = accuracy.to_string();
    assert_eq!(display, "MAE 1.75 | RMSE 2.06 | MAPE 9.22% | SMAPE 9.56%");
}

#[test]
fn test_forecast_accuracy_rejects_mismatch() {
    assert!(forecast_accuracy(&[1.0], &[1.0, 2.0]).is_err());
    assert!(forecast_accuracy(&[], &[]).is_err());
}

#[test]
fn test_summarize() {
    let forecast = ForecastResult::new(
        vec![101.0, 104.0, 110.0],
        vec![95.0, 96.0, 100.0],
        vec![107.0, 112.0, 120.0],
        8.35,
    )
    .unwrap();

    let summary = summarize("ARIMA(1,1,0)", 100.0, &forecast).unwrap();

    assert_eq!(summary.model_name, "ARIMA(1,1,0)");
    assert_eq!(summary.confidence_interval, 8.35);
    assert_eq!(summary.mean_prediction, 105.0);
    assert_eq!(summary.growth_percent, 10.0);
    assert_eq!(summary.last_prediction, 110.0);

    let json = serde_json::to_value(&summary).unwrap();
    assert!(json.get("growthPercent").is_some());
    assert!(json.get("meanPrediction").is_some());
}

#[test]
fn test_summarize_rounding_and_dated_forecast() {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    let forecast = ForecastResult::new(
        vec![TimePoint::new(date, 133.33)],
        vec![TimePoint::new(date, 120.0)],
        vec![TimePoint::new(date, 140.0)],
        1.0,
    )
    .unwrap();

    let summary = summarize("Prophet", 120.0, &forecast).unwrap();

    assert_eq!(summary.mean_prediction, 133.0);
    assert_eq!(summary.growth_percent, 11.1);
}

#[test]
fn test_summarize_rejects_zero_baseline() {
    let forecast = ForecastResult::new(vec![1.0], vec![0.0], vec![2.0], 1.0).unwrap();

    assert!(matches!(
        summarize("ARIMA", 0.0, &forecast),
        Err(ForecastError::InvalidInput(_))
    ));
}

#[test]
fn test_backtest_arima() {
    let history: Vec<f64> = (0..18).map(|i| 100.0 + 2.0 * i as f64).collect();
    let model = ArimaLike::new(ArimaParams::default());

    let accuracy = backtest(&model, &history, 6).unwrap();

    assert!(accuracy.mae >= 0.0);
    assert!(accuracy.rmse >= accuracy.mae - 1e-9);
}

#[test]
fn test_backtest_prophet_on_straight_line() {
    // Flat line: the only error left is the seasonal and holiday terms
    let start = chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let history: Vec<TimePoint> = (0..12)
        .map(|i| TimePoint::new(sales_forecast::data::add_months(start, i).unwrap(), 50.0))
        .collect();

    let accuracy = backtest(&ProphetLike::new(), &history, 3).unwrap();

    assert!(accuracy.mae > 0.0);
    assert!(accuracy.mape > 0.0);
}

#[test]
fn test_backtest_needs_enough_history() {
    let model = ArimaLike::default();

    assert!(matches!(
        backtest(&model, &[1.0, 2.0, 3.0], 0),
        Err(ForecastError::InvalidInput(_))
    ));
    assert!(matches!(
        backtest(&model, &[1.0, 2.0, 3.0], 2),
        Err(ForecastError::InvalidInput(_))
    ));
}

#[test]
fn test_forecast_accuracy_zero_actuals() {
    // A month with no sales adds nothing to MAPE but still counts towards the average
    let accuracy = forecast_accuracy(&[0.0, 10.0], &[0.0, 20.0]).unwrap();

    assert_relative_eq!(accuracy.mae, 5.0);
    assert_relative_eq!(accuracy.mape, 25.0);
    // 2*10/30 averaged over both months
    assert_relative_eq!(accuracy.smape, 100.0 / 3.0, epsilon = 1e-9);
}

fn summary(name: &str, growth_percent: f64, confidence_interval: f64) -> ModelSummary {
    ModelSummary {
        model_name: name.to_string(),
        confidence_interval,
        mean_prediction: 100.0,
        growth_percent,
        last_prediction: 100.0,
        accuracy: None,
    }
}

#[test]
fn test_preferred_model_by_growth_and_confidence() {
    let arima = summary("ARIMA", 8.0, 12.0);
    let prophet = summary("Prophet", 5.0, 15.0);

    let by_growth = preferred_model(&arima, &prophet, ComparisonMetric::Growth).unwrap();
    assert_eq!(by_growth.model_name, "ARIMA");

    let by_confidence = preferred_model(&arima, &prophet, ComparisonMetric::Confidence).unwrap();
    assert_eq!(by_confidence.model_name, "ARIMA");

    let wider = summary("ARIMA", 8.0, 20.0);
    let by_confidence = preferred_model(&wider, &prophet, ComparisonMetric::Confidence).unwrap();
    assert_eq!(by_confidence.model_name, "Prophet");
}

#[test]
fn test_preferred_model_ties_go_to_second() {
    let arima = summary("ARIMA", 5.0, 10.0);
    let prophet = summary("Prophet", 5.0, 10.0);

    for metric in [ComparisonMetric::Growth, ComparisonMetric::Confidence] {
        let winner = preferred_model(&arima, &prophet, metric).unwrap();
        assert_eq!(winner.model_name, "Prophet");
    }

    let scored = forecast_accuracy(&[10.0], &[12.0]).unwrap();
    let arima = arima.with_accuracy(scored.clone());
    let prophet = prophet.with_accuracy(scored);
    let winner = preferred_model(&arima, &prophet, ComparisonMetric::Accuracy).unwrap();
    assert_eq!(winner.model_name, "Prophet");
}

#[test]
fn test_preferred_model_by_accuracy() {
    let arima = summary("ARIMA", 0.0, 10.0)
        .with_accuracy(forecast_accuracy(&[10.0, 20.0], &[11.0, 21.0]).unwrap());
    let prophet = summary("Prophet", 0.0, 10.0)
        .with_accuracy(forecast_accuracy(&[10.0, 20.0], &[14.0, 26.0]).unwrap());

    let winner = preferred_model(&arima, &prophet, ComparisonMetric::Accuracy).unwrap();
    assert_eq!(winner.model_name, "ARIMA");

    let json = serde_json::to_value(&arima).unwrap();
    assert!(json["accuracy"]["rmse"].is_number());
    assert!(serde_json::to_value(summary("ARIMA", 0.0, 1.0)).unwrap().get("accuracy").is_none());
}

#[test]
fn test_preferred_model_accuracy_needs_backtest() {
    let arima = summary("ARIMA", 0.0, 10.0)
        .with_accuracy(forecast_accuracy(&[10.0], &[11.0]).unwrap());
    let prophet = summary("Prophet", 0.0, 10.0);

    assert!(matches!(
        preferred_model(&arima, &prophet, ComparisonMetric::Accuracy),
        Err(ForecastError::InvalidInput(_))
    ));
}
