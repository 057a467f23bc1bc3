//! Configuration types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::errors::Result;
use crate::common::types::{BuildPace, BuildStatus};
use crate::strategy::{PricingEngine, StrategyTable, DEFAULT_DISPLAY_DECIMAL_PLACES};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Pricing engine configuration
    #[serde(default)]
    pub pricing: PricingConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

impl AppConfig {
    /// Build a pricing engine from the pricing section
    pub fn build_engine(&self) -> Result<PricingEngine> {
        self.pricing.build_engine()
    }
}

/// Pricing engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Decimal places the recommendation table is rounded to
    #[serde(default = "default_display_decimal_places")]
    pub display_decimal_places: u32,
    /// Entries replacing the standard multipliers
    #[serde(default)]
    pub overrides: Vec<MultiplierOverride>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            display_decimal_places: default_display_decimal_places(),
            overrides: Vec::new(),
        }
    }
}

impl PricingConfig {
    /// Standard table with overrides applied in order
    pub fn build_table(&self) -> Result<StrategyTable> {
        self.overrides
            .iter()
            .try_fold(StrategyTable::default(), |table, entry| {
                table.with_multiplier(entry.build_status, entry.buildpace, entry.multiplier)
            })
    }

    pub fn build_engine(&self) -> Result<PricingEngine> {
        Ok(PricingEngine::with_table(self.build_table()?)
            .with_decimal_places(self.display_decimal_places))
    }
}

fn default_display_decimal_places() -> u32 {
    DEFAULT_DISPLAY_DECIMAL_PLACES
}

/// One replaced strategy table entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierOverride {
    pub build_status: BuildStatus,
    pub buildpace: BuildPace,
    pub multiplier: Decimal,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::PricingError;
    use crate::common::types::CompetitorPrices;
    use crate::strategy::PriceRecommender;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.pricing.display_decimal_places, 2);
        assert!(config.pricing.overrides.is_empty());
        assert_eq!(config.settings.log_level, "info");
        assert_eq!(config.settings.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides_apply_to_engine() {
        let config = PricingConfig {
            display_decimal_places: 1,
            overrides: vec![MultiplierOverride {
                build_status: BuildStatus::Strong,
                buildpace: BuildPace::Slow,
                multiplier: dec!(1.25),
            }],
        };
        let engine = config.build_engine().unwrap();
        let prices = CompetitorPrices::new([dec!(10), dec!(20), dec!(30)]).unwrap();

        assert_eq!(
            engine.recommend_price(&prices, BuildStatus::Strong, BuildPace::Slow),
            dec!(12.5)
        );
        // 10 * 1.005 = 10.05 -> 10.0 at one place (banker's rounding)
        let rows = engine.recommend_all_prices(&prices);
        assert_eq!(rows[5].price, dec!(10.0));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let config = PricingConfig {
            overrides: vec![MultiplierOverride {
                build_status: BuildStatus::Soft,
                buildpace: BuildPace::Slow,
                multiplier: dec!(-0.5),
            }],
            ..PricingConfig::default()
        };
        assert!(matches!(
            config.build_table(),
            Err(PricingError::InvalidMultiplier { .. })
        ));
    }
}
