//! Common test utilities and fixtures

#![allow(dead_code)]

use competitor_pricer::{BuildPace, BuildStatus, CompetitorPrices};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Reference prices used throughout: competitor 1 = 10, 2 = 20, 3 = 30
pub fn reference_prices() -> CompetitorPrices {
    prices(dec!(10), dec!(20), dec!(30))
}

/// All three competitors at the same price
pub fn flat_prices() -> CompetitorPrices {
    prices(dec!(15), dec!(15), dec!(15))
}

pub fn prices(first: Decimal, second: Decimal, third: Decimal) -> CompetitorPrices {
    CompetitorPrices::new([first, second, third]).expect("fixture prices are positive")
}

/// Fixed row order of the recommendation table
pub fn expected_order() -> Vec<(BuildStatus, BuildPace)> {
    vec![
        (BuildStatus::VeryStrong, BuildPace::Quick),
        (BuildStatus::VeryStrong, BuildPace::Slow),
        (BuildStatus::Strong, BuildPace::Quick),
        (BuildStatus::Strong, BuildPace::Slow),
        (BuildStatus::OnTrack, BuildPace::Quick),
        (BuildStatus::OnTrack, BuildPace::Slow),
        (BuildStatus::Soft, BuildPace::Quick),
        (BuildStatus::Soft, BuildPace::Slow),
        (BuildStatus::VerySoft, BuildPace::Quick),
        (BuildStatus::VerySoft, BuildPace::Slow),
    ]
}

/// Multiplier of each row, in table order
pub fn expected_multipliers() -> [Decimal; 10] {
    [
        dec!(1.01),
        dec!(0.98),
        dec!(0.98),
        dec!(1.05),
        dec!(1.05),
        dec!(1.005),
        dec!(1.005),
        dec!(0.95),
        dec!(0.95),
        dec!(0.9),
    ]
}
