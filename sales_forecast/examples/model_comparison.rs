use sales_forecast::{
    backtest, preferred_model, simulate_arima_like, simulate_prophet_like, summarize, values_of,
    ArimaLike, ArimaParams, ComparisonMetric, ProphetLike, SalesDataLoader,
};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load monthly sales from CSV
    let csv_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("examples")
        .join("csv")
        .join("monthly_sales.csv");

    println!("Loading data from: {}", csv_path.display());
    let history = SalesDataLoader::from_csv(csv_path)?;
    let values = values_of(&history);
    println!("Loaded {} months", history.len());

    let last = *history.last().ok_or("no sales rows in CSV")?;
    let periods = 6;

    let arima = simulate_arima_like(&values, periods, ArimaParams::default())?
        .with_monthly_dates(last.date)?;
    let prophet = simulate_prophet_like(&history, periods)?;

    println!("\n{:<12} {:>22} {:>22}", "Month", "ARIMA (lo..hi)", "Prophet (lo..hi)");
    for ((a_lo, a, a_hi), (p_lo, p, p_hi)) in arima.steps().zip(prophet.steps()) {
        println!(
            "{:<12} {:>7.2} ({:>6.2}..{:>6.2}) {:>7.2} ({:>6.2}..{:>6.2})",
            a.date, a.value, a_lo.value, a_hi.value, p.value, p_lo.value, p_hi.value
        );
    }

    // Score both models on the last 6 months
    let arima_summary = summarize("ARIMA", last.value, &arima)?
        .with_accuracy(backtest(&ArimaLike::default(), &values, 6)?);
    let prophet_summary = summarize("Prophet", last.value, &prophet)?
        .with_accuracy(backtest(&ProphetLike::new(), &history, 6)?);

    for summary in [&arima_summary, &prophet_summary] {
        println!(
            "\n{}: mean {:.0}, growth {:+.1}%, confidence ±{:.2}",
            summary.model_name,
            summary.mean_prediction,
            summary.growth_percent,
            summary.confidence_interval
        );
        if let Some(accuracy) = &summary.accuracy {
            println!("  {}", accuracy);
        }
    }

    println!();
    for metric in [
        ComparisonMetric::Accuracy,
        ComparisonMetric::Growth,
        ComparisonMetric::Confidence,
    ] {
        let winner = preferred_model(&arima_summary, &prophet_summary, metric)?;
        println!("Best on {:?}: {}", metric, winner.model_name);
    }

    Ok(())
}
