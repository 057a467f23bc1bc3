//! Domain types shared by the pricing engine and its callers

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::{PricingError, Result};

/// Number of competitor prices the engine works from
pub const COMPETITOR_COUNT: usize = 3;

/// Largest accepted competitor price, 10^24
///
/// Multiplied by the largest allowed multiplier this stays far below
/// `Decimal::MAX`, so pricing arithmetic cannot overflow.
pub fn max_price() -> Decimal {
    Decimal::from_i128_with_scale(1_000_000_000_000_000_000_000_000, 0)
}

/// How a build tracks versus its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuildStatus {
    #[serde(rename = "Very Strong")]
    VeryStrong,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "On track")]
    OnTrack,
    #[serde(rename = "Soft")]
    Soft,
    #[serde(rename = "Very Soft")]
    VerySoft,
}

impl BuildStatus {
    /// Every status, in table order
    pub const ALL: [BuildStatus; 5] = [
        BuildStatus::VeryStrong,
        BuildStatus::Strong,
        BuildStatus::OnTrack,
        BuildStatus::Soft,
        BuildStatus::VerySoft,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BuildStatus::VeryStrong => "Very Strong",
            BuildStatus::Strong => "Strong",
            BuildStatus::OnTrack => "On track",
            BuildStatus::Soft => "Soft",
            BuildStatus::VerySoft => "Very Soft",
        }
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BuildStatus {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_label(s).as_str() {
            "very strong" => Ok(BuildStatus::VeryStrong),
            "strong" => Ok(BuildStatus::Strong),
            "on track" => Ok(BuildStatus::OnTrack),
            "soft" => Ok(BuildStatus::Soft),
            "very soft" => Ok(BuildStatus::VerySoft),
            _ => Err(PricingError::UnknownBuildStatus(s.to_string())),
        }
    }
}

/// How quickly units are being built and sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildPace {
    Quick,
    Slow,
}

impl BuildPace {
    /// Every pace, in table order
    pub const ALL: [BuildPace; 2] = [BuildPace::Quick, BuildPace::Slow];

    pub fn label(&self) -> &'static str {
        match self {
            BuildPace::Quick => "quick",
            BuildPace::Slow => "slow",
        }
    }
}

impl fmt::Display for BuildPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BuildPace {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_label(s).as_str() {
            "quick" => Ok(BuildPace::Quick),
            "slow" => Ok(BuildPace::Slow),
            _ => Err(PricingError::UnknownBuildPace(s.to_string())),
        }
    }
}

/// Lowercase, treat `-` and `_` as spaces, collapse runs of whitespace
fn normalize_label(s: &str) -> String {
    s.replace(['-', '_'], " ")
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The three competitor prices, in the order they were entered
///
/// Order matters: index 1 (competitor 2) is used as-is by the strong-market
/// rules, it is not a ranked value. Every price is guaranteed positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CompetitorPrices([Decimal; COMPETITOR_COUNT]);

impl CompetitorPrices {
    /// Validate three decimal prices
    ///
    /// Each price must be above zero and at most [`max_price`].
    pub fn new(prices: [Decimal; COMPETITOR_COUNT]) -> Result<Self> {
        let max = max_price();
        for (index, value) in prices.iter().enumerate() {
            if *value <= Decimal::ZERO {
                return Err(PricingError::NonPositivePrice {
                    index,
                    value: *value,
                });
            }
            if *value > max {
                return Err(PricingError::PriceOutOfRange {
                    index,
                    value: value.to_string(),
                    max,
                });
            }
        }
        Ok(Self(prices))
    }

    /// Validate three floating point prices
    pub fn from_f64(prices: [f64; COMPETITOR_COUNT]) -> Result<Self> {
        let mut converted = [Decimal::ZERO; COMPETITOR_COUNT];
        for (index, value) in prices.iter().enumerate() {
            converted[index] = f64_to_price(index, *value)?;
        }
        Self::new(converted)
    }

    /// Parse and validate prices typed by a user
    ///
    /// Accepts plain (`12.5`) and scientific (`1.25e1`) notation.
    pub fn parse<S: AsRef<str>>(inputs: &[S]) -> Result<Self> {
        if inputs.len() != COMPETITOR_COUNT {
            return Err(PricingError::WrongPriceCount(inputs.len()));
        }

        let mut parsed = [Decimal::ZERO; COMPETITOR_COUNT];
        for (index, input) in inputs.iter().enumerate() {
            parsed[index] = parse_price(index, input.as_ref())?;
        }
        Self::new(parsed)
    }

    /// Competitor 2's price exactly as entered
    pub fn second(&self) -> Decimal {
        self.0[1]
    }

    /// Lowest of the three prices
    pub fn lowest(&self) -> Decimal {
        self.0[0].min(self.0[1]).min(self.0[2])
    }

    pub fn as_array(&self) -> &[Decimal; COMPETITOR_COUNT] {
        &self.0
    }
}

impl TryFrom<[Decimal; COMPETITOR_COUNT]> for CompetitorPrices {
    type Error = PricingError;

    fn try_from(prices: [Decimal; COMPETITOR_COUNT]) -> Result<Self> {
        Self::new(prices)
    }
}

impl<'de> Deserialize<'de> for CompetitorPrices {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let prices = <[Decimal; COMPETITOR_COUNT]>::deserialize(deserializer)?;
        Self::new(prices).map_err(serde::de::Error::custom)
    }
}

fn f64_to_price(index: usize, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(PricingError::InvalidPrice {
            index,
            input: value.to_string(),
        });
    }

    match Decimal::from_f64(value) {
        Some(price) => Ok(price),
        // Finite but beyond Decimal's range
        None if value > 0.0 => Err(PricingError::PriceOutOfRange {
            index,
            value: value.to_string(),
            max: max_price(),
        }),
        None => Err(PricingError::NonPositivePrice {
            index,
            value: Decimal::MIN,
        }),
    }
}

fn parse_price(index: usize, input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| match trimmed.parse::<f64>() {
            // A real number too large for Decimal
            Ok(value) if value.is_finite() && value >= 1.0 => PricingError::PriceOutOfRange {
                index,
                value: trimmed.to_string(),
                max: max_price(),
            },
            _ => PricingError::InvalidPrice {
                index,
                input: input.to_string(),
            },
        })
}

/// One row of the recommendation table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecommendation {
    pub build_status: BuildStatus,
    pub buildpace: BuildPace,
    /// Recommended price, rounded for display
    pub price: Decimal,
}

impl PriceRecommendation {
    pub fn new(build_status: BuildStatus, buildpace: BuildPace, price: Decimal) -> Self {
        Self {
            build_status,
            buildpace,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_labels_round_trip() {
        for status in BuildStatus::ALL {
            assert_eq!(status.to_string().parse::<BuildStatus>(), Ok(status));
        }
        for pace in BuildPace::ALL {
            assert_eq!(pace.to_string().parse::<BuildPace>(), Ok(pace));
        }
    }

    #[test]
    fn test_status_parsing_is_lenient() {
        assert_eq!("very-strong".parse::<BuildStatus>(), Ok(BuildStatus::VeryStrong));
        assert_eq!("ON_TRACK".parse::<BuildStatus>(), Ok(BuildStatus::OnTrack));
        assert_eq!("  very   soft ".parse::<BuildStatus>(), Ok(BuildStatus::VerySoft));
        assert_eq!("Quick".parse::<BuildPace>(), Ok(BuildPace::Quick));
    }

    #[test]
    fn test_unknown_labels_are_rejected() {
        assert_eq!(
            "stellar".parse::<BuildStatus>(),
            Err(PricingError::UnknownBuildStatus("stellar".to_string()))
        );
        assert_eq!(
            "medium".parse::<BuildPace>(),
            Err(PricingError::UnknownBuildPace("medium".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&BuildStatus::OnTrack).unwrap();
        assert_eq!(json, "\"On track\"");
        let json = serde_json::to_string(&BuildPace::Slow).unwrap();
        assert_eq!(json, "\"slow\"");

        let status: BuildStatus = serde_json::from_str("\"Very Soft\"").unwrap();
        assert_eq!(status, BuildStatus::VerySoft);
    }

    #[test]
    fn test_competitor_prices_accessors() {
        let prices = CompetitorPrices::new([dec!(30), dec!(20), dec!(10)]).unwrap();
        assert_eq!(prices.second(), dec!(20));
        assert_eq!(prices.lowest(), dec!(10));
        assert_eq!(prices.as_array()[0], dec!(30));
    }

    #[test]
    fn test_largest_price_accepted() {
        let max = max_price();
        assert_eq!(max, dec!(1000000000000000000000000));
        assert!(CompetitorPrices::new([max, max, max]).is_ok());

        let above = max + Decimal::ONE;
        assert_eq!(
            CompetitorPrices::new([dec!(1), above, dec!(1)]),
            Err(PricingError::PriceOutOfRange {
                index: 1,
                value: above.to_string(),
                max,
            })
        );
    }

    #[test]
    fn test_prices_near_decimal_max_rejected() {
        let result = CompetitorPrices::parse(&["79000000000000000000000000000"; 3]);
        assert!(matches!(
            result,
            Err(PricingError::PriceOutOfRange { index: 0, .. })
        ));

        let result = CompetitorPrices::parse(&["10", "1e30", "30"]);
        assert!(matches!(
            result,
            Err(PricingError::PriceOutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn test_from_f64_beyond_decimal_range() {
        let result = CompetitorPrices::from_f64([1e30, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(PricingError::PriceOutOfRange { index: 0, .. })
        ));
        assert!(matches!(
            CompetitorPrices::from_f64([2.0, 3.0, 1e25]),
            Err(PricingError::PriceOutOfRange { index: 2, .. })
        ));
    }

    #[test]
    fn test_non_positive_prices_rejected() {
        assert_eq!(
            CompetitorPrices::new([dec!(10), dec!(0), dec!(30)]),
            Err(PricingError::NonPositivePrice {
                index: 1,
                value: dec!(0)
            })
        );
        assert!(CompetitorPrices::new([dec!(-1), dec!(20), dec!(30)]).is_err());
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(CompetitorPrices::from_f64([10.0, f64::NAN, 30.0]).is_err());
        assert!(CompetitorPrices::from_f64([f64::INFINITY, 20.0, 30.0]).is_err());

        let prices = CompetitorPrices::from_f64([10.5, 20.0, 30.25]).unwrap();
        assert_eq!(prices.as_array(), &[dec!(10.5), dec!(20), dec!(30.25)]);
    }

    #[test]
    fn test_parse_user_input() {
        let prices = CompetitorPrices::parse(&[" 12.50", "1.5e1", "9"]).unwrap();
        assert_eq!(prices.as_array(), &[dec!(12.50), dec!(15), dec!(9)]);

        assert_eq!(
            CompetitorPrices::parse(&["12", "abc", "9"]),
            Err(PricingError::InvalidPrice {
                index: 1,
                input: "abc".to_string()
            })
        );
        assert_eq!(
            CompetitorPrices::parse(&["12", "9"]),
            Err(PricingError::WrongPriceCount(2))
        );
        assert!(CompetitorPrices::parse(&["12", "-9", "4"]).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let prices: CompetitorPrices = serde_json::from_str("[\"10\", \"20\", \"30\"]").unwrap();
        assert_eq!(prices.lowest(), dec!(10));

        let invalid = serde_json::from_str::<CompetitorPrices>("[\"10\", \"0\", \"30\"]");
        assert!(invalid.is_err());
    }
}
