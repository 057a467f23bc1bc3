//! Command-line arguments and the argument-to-output step of the binary

use clap::Parser;
use tracing::info;

use crate::common::errors::{PricingError, Result};
use crate::common::types::{BuildPace, BuildStatus, CompetitorPrices, PriceRecommendation};
use crate::strategy::{BaselineSource, PriceRecommender};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Prices of competitors 1, 2 and 3, in that order
    #[arg(value_name = "PRICE", num_args = 3, required = true, allow_negative_numbers = true)]
    pub prices: Vec<String>,

    /// Build vs target status (Very Strong, Strong, On track, Soft, Very Soft)
    #[arg(long, requires = "pace")]
    pub status: Option<BuildStatus>,

    /// Buildpace (quick, slow)
    #[arg(long, requires = "status")]
    pub pace: Option<BuildPace>,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error), overrides the config file
    #[arg(long, env = "PRICER_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Validate the prices and render the recommendation(s) as pretty JSON
///
/// With `--status` and `--pace` the output is a single object, otherwise the
/// full 10-row array.
pub fn run<R: PriceRecommender + ?Sized>(args: &Args, recommender: &R) -> Result<String> {
    let prices = CompetitorPrices::parse(args.prices.as_slice())?;

    let output = match (args.status, args.pace) {
        (Some(status), Some(pace)) => {
            let price = recommender.recommend_price(&prices, status, pace);
            info!(
                %status,
                %pace,
                baseline = ?BaselineSource::for_pair(status, pace),
                "Computed single recommendation"
            );
            let row = PriceRecommendation::new(
                status,
                pace,
                price.round_dp(recommender.decimal_places()),
            );
            serde_json::to_string_pretty(&row)
        }
        _ => {
            let rows = recommender.recommend_all_prices(&prices);
            info!(rows = rows.len(), "Computed recommendation table");
            serde_json::to_string_pretty(&rows)
        }
    };

    output.map_err(|e| PricingError::Serialization(e.to_string()))
}
