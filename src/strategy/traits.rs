use rust_decimal::Decimal;

use crate::common::types::{BuildPace, BuildStatus, CompetitorPrices, PriceRecommendation};

/// Decimal places recommended prices are rounded to
pub const DEFAULT_DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Core pricing trait
///
/// Implementors price a single (status, pace) pair; the full recommendation
/// table is derived from that by the provided method.
///
/// # Implementation Notes
///
/// - `recommend_price` must be pure: same inputs, same output
/// - It never fails; pairs an implementor has no rule for should price at
///   the baseline rather than erroring
/// - The returned price is unrounded; rounding happens when the table is
///   built
pub trait PriceRecommender: Send + Sync {
    /// Recommended price for one market condition, unrounded
    fn recommend_price(
        &self,
        prices: &CompetitorPrices,
        status: BuildStatus,
        pace: BuildPace,
    ) -> Decimal;

    /// Decimal places used when building the recommendation table
    fn decimal_places(&self) -> u32 {
        DEFAULT_DISPLAY_DECIMAL_PLACES
    }

    /// Recommended prices for every (status, pace) pair
    ///
    /// Always 10 rows: statuses from Very Strong down to Very Soft, each
    /// with quick then slow. Prices are rounded on their exact decimal value,
    /// half to even, so 1.035 becomes 1.04 and 1.845 becomes 1.84.
    fn recommend_all_prices(&self, prices: &CompetitorPrices) -> Vec<PriceRecommendation> {
        let decimal_places = self.decimal_places();
        let mut recommendations =
            Vec::with_capacity(BuildStatus::ALL.len() * BuildPace::ALL.len());

        for status in BuildStatus::ALL {
            for pace in BuildPace::ALL {
                let price = self.recommend_price(prices, status, pace);
                recommendations.push(PriceRecommendation::new(
                    status,
                    pace,
                    price.round_dp(decimal_places),
                ));
            }
        }

        recommendations
    }
}

/// Boxed recommender for dynamic dispatch
pub type BoxedRecommender = Box<dyn PriceRecommender>;
