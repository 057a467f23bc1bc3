use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::common::errors::{PricingError, Result};
use crate::common::types::{BuildPace, BuildStatus};

/// Key into the strategy table
pub type StrategyKey = (BuildStatus, BuildPace);

/// Standard table, built once per process
///
/// (Soft, quick) is intentionally absent: the engine prices it with
/// [`soft_quick_multiplier`] instead of a table entry.
static STANDARD_TABLE: Lazy<StrategyTable> = Lazy::new(|| {
    StrategyTable::from_entries([
        ((BuildStatus::VeryStrong, BuildPace::Quick), dec!(1.01)),
        ((BuildStatus::VeryStrong, BuildPace::Slow), dec!(0.98)),
        ((BuildStatus::Strong, BuildPace::Quick), dec!(0.98)),
        ((BuildStatus::Strong, BuildPace::Slow), dec!(1.05)),
        ((BuildStatus::OnTrack, BuildPace::Quick), dec!(1.05)),
        ((BuildStatus::OnTrack, BuildPace::Slow), dec!(1.005)),
        ((BuildStatus::Soft, BuildPace::Slow), dec!(0.95)),
        ((BuildStatus::VerySoft, BuildPace::Quick), dec!(0.95)),
        ((BuildStatus::VerySoft, BuildPace::Slow), dec!(0.9)),
    ])
});

/// Largest multiplier a table may hold
///
/// Together with [`max_price`](crate::common::types::max_price) this bounds
/// every recommended price well inside `Decimal`'s range.
pub fn max_multiplier() -> Decimal {
    Decimal::ONE_HUNDRED
}

/// Multiplier applied to (Soft, quick)
///
/// Equal to the (On track, slow) entry but kept as its own literal.
pub fn soft_quick_multiplier() -> Decimal {
    Decimal::ONE + dec!(0.005)
}

/// Read-only mapping from a (status, pace) pair to a price multiplier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyTable {
    multipliers: HashMap<StrategyKey, Decimal>,
}

impl StrategyTable {
    /// The shared standard table, built once per process
    pub fn standard() -> &'static StrategyTable {
        &STANDARD_TABLE
    }

    /// A table with no entries; every pair falls back to the baseline
    pub fn empty() -> Self {
        Self {
            multipliers: HashMap::new(),
        }
    }

    fn from_entries(entries: impl IntoIterator<Item = (StrategyKey, Decimal)>) -> Self {
        Self {
            multipliers: entries.into_iter().collect(),
        }
    }

    /// Multiplier for a pair, if the table covers it
    pub fn multiplier(&self, status: BuildStatus, pace: BuildPace) -> Option<Decimal> {
        self.multipliers.get(&(status, pace)).copied()
    }

    /// Replace or insert one entry
    ///
    /// Multipliers must be above zero and at most [`max_multiplier`].
    /// (Soft, quick) is rejected: that pair always uses
    /// [`soft_quick_multiplier`].
    pub fn with_multiplier(
        mut self,
        status: BuildStatus,
        pace: BuildPace,
        multiplier: Decimal,
    ) -> Result<Self> {
        if (status, pace) == (BuildStatus::Soft, BuildPace::Quick) {
            return Err(PricingError::Configuration(format!(
                "({}, {}) uses a fixed multiplier and cannot be overridden",
                status, pace
            )));
        }

        let max = max_multiplier();
        if multiplier <= Decimal::ZERO || multiplier > max {
            return Err(PricingError::InvalidMultiplier {
                build_status: status.to_string(),
                buildpace: pace.to_string(),
                multiplier,
                max,
            });
        }

        self.multipliers.insert((status, pace), multiplier);
        Ok(self)
    }

    /// Drop one entry so the pair prices at the baseline
    pub fn without(mut self, status: BuildStatus, pace: BuildPace) -> Self {
        self.multipliers.remove(&(status, pace));
        self
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}
