use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::common::types::{BuildPace, BuildStatus, CompetitorPrices};
use crate::strategy::table::{soft_quick_multiplier, StrategyTable};
use crate::strategy::traits::{PriceRecommender, DEFAULT_DISPLAY_DECIMAL_PLACES};

/// Which competitor price a rule multiplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineSource {
    /// Competitor 2's price as entered, not a ranked value
    SecondCompetitor,
    /// The lowest of the three prices
    LowestCompetitor,
}

impl BaselineSource {
    /// Base used for a pair
    ///
    /// Strong markets anchor on competitor 2; everything else undercuts from
    /// the lowest price.
    pub fn for_pair(status: BuildStatus, pace: BuildPace) -> Self {
        match (status, pace) {
            (BuildStatus::VeryStrong, _) | (BuildStatus::Strong, BuildPace::Quick) => {
                BaselineSource::SecondCompetitor
            }
            _ => BaselineSource::LowestCompetitor,
        }
    }

    pub fn price(&self, prices: &CompetitorPrices) -> Decimal {
        match self {
            BaselineSource::SecondCompetitor => prices.second(),
            BaselineSource::LowestCompetitor => prices.lowest(),
        }
    }
}

/// Reference price every rule falls back to: the lowest competitor price
pub fn compute_baseline(prices: &CompetitorPrices) -> Decimal {
    prices.lowest()
}

/// Table-driven pricing engine
///
/// Stateless apart from its read-only table; every call is independent.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    table: StrategyTable,
    decimal_places: u32,
}

impl PricingEngine {
    /// Engine over the standard table, rounding to 2 decimal places
    pub fn new() -> Self {
        Self::with_table(StrategyTable::default())
    }

    pub fn with_table(table: StrategyTable) -> Self {
        Self {
            table,
            decimal_places: DEFAULT_DISPLAY_DECIMAL_PLACES,
        }
    }

    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn table(&self) -> &StrategyTable {
        &self.table
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceRecommender for PricingEngine {
    fn recommend_price(
        &self,
        prices: &CompetitorPrices,
        status: BuildStatus,
        pace: BuildPace,
    ) -> Decimal {
        let baseline = compute_baseline(prices);

        let multiplier = match (status, pace) {
            (BuildStatus::Soft, BuildPace::Quick) => Some(soft_quick_multiplier()),
            _ => self.table.multiplier(status, pace),
        };

        match multiplier {
            Some(multiplier) => {
                let base = BaselineSource::for_pair(status, pace).price(prices);
                // Bounded by max_price() * max_multiplier(), cannot overflow
                let price = base * multiplier;
                trace!(%status, %pace, %base, %multiplier, %price, "Priced pair");
                price
            }
            None => {
                debug!(%status, %pace, %baseline, "No multiplier for pair, using baseline");
                baseline
            }
        }
    }

    fn decimal_places(&self) -> u32 {
        self.decimal_places
    }
}
