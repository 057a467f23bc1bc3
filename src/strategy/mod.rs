//! Pricing strategy module
//!
//! Turns three competitor prices plus a market condition into a recommended
//! sale price.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CompetitorPrices [c1, c2, c3]   (validated, all > 0)       │
//! └─────────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  BaselineSource::for_pair(status, pace)                     │
//! │    - Very Strong, Strong/quick  → c2 as entered             │
//! │    - everything else            → min(c1, c2, c3)           │
//! └─────────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  StrategyTable multiplier       (Soft/quick: fixed 1.005)   │
//! │    - no entry → baseline returned unchanged                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`PriceRecommender`]: Trait for pricing one pair and building the table
//! - [`PricingEngine`]: Table-driven implementation
//! - [`StrategyTable`]: Read-only multipliers keyed by (status, pace)
//! - [`BaselineSource`]: Which competitor price a rule starts from
//!
//! # Example
//!
//! ```
//! use competitor_pricer::{recommend_all_prices, recommend_price, BuildPace, BuildStatus, CompetitorPrices};
//! use rust_decimal_macros::dec;
//!
//! let prices = CompetitorPrices::new([dec!(10), dec!(20), dec!(30)]).unwrap();
//!
//! let price = recommend_price(&prices, BuildStatus::VeryStrong, BuildPace::Quick);
//! assert_eq!(price, dec!(20.2));
//!
//! let table = recommend_all_prices(&prices);
//! assert_eq!(table.len(), 10);
//! ```

mod engine;
mod table;
mod traits;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::common::types::{BuildPace, BuildStatus, CompetitorPrices, PriceRecommendation};

pub use engine::{compute_baseline, BaselineSource, PricingEngine};

pub use table::{max_multiplier, soft_quick_multiplier, StrategyKey, StrategyTable};

pub use traits::{BoxedRecommender, PriceRecommender, DEFAULT_DISPLAY_DECIMAL_PLACES};

static STANDARD_ENGINE: Lazy<PricingEngine> = Lazy::new(PricingEngine::new);

/// Recommended price for one pair using the standard table, unrounded
pub fn recommend_price(prices: &CompetitorPrices, status: BuildStatus, pace: BuildPace) -> Decimal {
    STANDARD_ENGINE.recommend_price(prices, status, pace)
}

/// All 10 recommendations using the standard table, rounded to 2 places
pub fn recommend_all_prices(prices: &CompetitorPrices) -> Vec<PriceRecommendation> {
    STANDARD_ENGINE.recommend_all_prices(prices)
}
