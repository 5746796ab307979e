use afl_elo_processor::{
    args::Args,
    data::afltables,
    model::{config::EloConfig, elo_model::EloModel, structures::processing::ProcessingResult}
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .init();

    let fixtures = match &args.file {
        Some(path) => afltables::load_fixtures(path),
        None => afltables::fetch_fixtures(&args.url).await
    }
    .expect("Expected a readable fixture source");

    info!("loaded {} fixtures", fixtures.len());

    let mut model = EloModel::new(EloConfig::default()).expect("Expected the default configuration to be valid");
    let result = model
        .process(&fixtures)
        .expect("Expected the fixture stream to pass validation");

    info!("mean absolute forecast error: {:.4}", mean_absolute_error(&model, &result));

    println!("Final ladder after {} matches:", result.len());
    for (position, (team, rating)) in model.rating_tracker.ladder().iter().enumerate() {
        println!("{:>2}. {:<16} {:>7.1}", position + 1, team, rating);
    }
}

/// Backtest score over the whole run: mean absolute gap between the forecast
/// and the configured target column.
fn mean_absolute_error(model: &EloModel, result: &ProcessingResult) -> f64 {
    let records = result.records();
    if records.is_empty() {
        return 0.0;
    }

    let total: f64 = records
        .iter()
        .filter_map(|record| {
            let actual = record.fixture.target_value(model.config.target)?.as_f64()?;

            Some((record.expected_result - actual).abs())
        })
        .sum();

    total / records.len() as f64
}
