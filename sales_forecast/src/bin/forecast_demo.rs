use chrono::{NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use sales_forecast::data::DATE_FORMAT;
use sales_forecast::{
    backtest, format_comparison, format_forecast, generate_historical_series, summarize,
    values_of, ArimaLike, ForecastConfig, ForecastModel, ProphetLike, Result, SalesDataLoader,
    TimePoint,
};
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelChoice {
    Arima,
    Prophet,
    Compare,
}

#[derive(Parser)]
#[command(name = "forecast_demo")]
#[command(about = "Generate sales history and print forecast chart data as JSON")]
#[command(version)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV of `date,value` rows to use instead of synthetic history
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "compare")]
    model: ModelChoice,

    #[arg(long)]
    months: Option<usize>,

    #[arg(long)]
    periods: Option<usize>,

    #[arg(short = 'p', long)]
    ar_order: Option<usize>,

    #[arg(short = 'd', long)]
    diff_order: Option<usize>,

    #[arg(short = 'q', long)]
    ma_order: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Anchor month for synthetic history (YYYY-MM-DD); defaults to today
    #[arg(long)]
    today: Option<String>,

    /// Also back-test each model over this many held-out months
    #[arg(long)]
    holdout: Option<usize>,
}

impl Cli {
    fn resolve_config(&self) -> Result<ForecastConfig> {
        let mut config = match &self.config {
            Some(path) => ForecastConfig::from_json_file(path)?,
            None => ForecastConfig::default(),
        };

        if let Some(months) = self.months {
            config.history_months = months;
        }
        if let Some(periods) = self.periods {
            config.periods = periods;
        }
        if let Some(p) = self.ar_order {
            config.arima.p = p;
        }
        if let Some(d) = self.diff_order {
            config.arima.d = d;
        }
        if let Some(q) = self.ma_order {
            config.arima.q = q;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }

    fn today(&self) -> Result<NaiveDate> {
        match &self.today {
            Some(date) => Ok(NaiveDate::parse_from_str(date, DATE_FORMAT)?),
            None => Ok(Utc::now().date_naive()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let history: Vec<TimePoint> = match &cli.input {
        Some(path) => {
            log::info!("loading history from {}", path.display());
            SalesDataLoader::from_csv(path)?
        }
        None => {
            let mut rng = config.rng();
            generate_historical_series(config.history_months, cli.today()?, &mut rng)?
        }
    };
    let last = history.last().copied().ok_or_else(|| {
        sales_forecast::ForecastError::InvalidInput("no history to forecast from".to_string())
    })?;
    log::info!(
        "forecasting {} months from {} observations ending {}",
        config.periods,
        history.len(),
        last.date
    );

    let values = values_of(&history);
    let arima = ArimaLike::new(config.arima);
    let prophet = ProphetLike::new();

    let output = match cli.model {
        ModelChoice::Arima => {
            let forecast = arima.forecast(&values, config.periods)?;
            let summary = summarize(arima.name(), last.value, &forecast)?;
            let rows = format_forecast(&history, &forecast.with_monthly_dates(last.date)?)?;
            json!({ "summary": summary, "rows": rows })
        }
        ModelChoice::Prophet => {
            let forecast = prophet.forecast(&history, config.periods)?;
            let summary = summarize(prophet.name(), last.value, &forecast)?;
            let rows = format_forecast(&history, &forecast)?;
            json!({ "summary": summary, "rows": rows })
        }
        ModelChoice::Compare => {
            let arima_forecast = arima
                .forecast(&values, config.periods)?
                .with_monthly_dates(last.date)?;
            let prophet_forecast = prophet.forecast(&history, config.periods)?;
            let rows = format_comparison(&history, &arima_forecast, &prophet_forecast)?;
            json!({
                "summaries": [
                    summarize(arima.name(), last.value, &arima_forecast)?,
                    summarize(prophet.name(), last.value, &prophet_forecast)?,
                ],
                "rows": rows,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    if let Some(holdout) = cli.holdout {
        match backtest(&arima, &values, holdout) {
            Ok(accuracy) => log::info!("{} back-test\n{}", arima.name(), accuracy),
            Err(e) => log::warn!("{} back-test skipped: {}", arima.name(), e),
        }
        match backtest(&prophet, &history, holdout) {
            Ok(accuracy) => log::info!("{} back-test\n{}", prophet.name(), accuracy),
            Err(e) => log::warn!("{} back-test skipped: {}", prophet.name(), e),
        }
    }

    Ok(())
}
