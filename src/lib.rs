//! CompetitorPricer Library
//!
//! Recommends a sale price from three competitor prices and the current
//! build vs target / buildpace market conditions.

pub mod cli;
pub mod common;
pub mod config;
pub mod strategy;

// Re-export commonly used types
pub use common::errors::{PricingError, Result};
pub use common::types::{BuildPace, BuildStatus, CompetitorPrices, PriceRecommendation};
pub use config::types::AppConfig;

// Pricing engine
pub use strategy::{
    compute_baseline, recommend_all_prices, recommend_price, BaselineSource, BoxedRecommender,
    PriceRecommender, PricingEngine, StrategyTable,
};
