//! Error types for the application

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using our PricingError
pub type Result<T> = std::result::Result<T, PricingError>;

/// Main error type for input validation and configuration
///
/// The pricing functions themselves never fail; only the constructors that
/// turn raw user input into validated types, and the config layer, do.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A competitor price was zero or negative
    #[error("Competitor {} price must be a positive number, got {value}", .index + 1)]
    NonPositivePrice { index: usize, value: Decimal },

    /// A competitor price could not be read as a finite number
    #[error("Competitor {} price is not a valid number: {input:?}", .index + 1)]
    InvalidPrice { index: usize, input: String },

    /// A competitor price was above the largest price the engine accepts
    #[error("Competitor {} price {value} exceeds the maximum of {max}", .index + 1)]
    PriceOutOfRange {
        index: usize,
        value: String,
        max: Decimal,
    },

    /// Exactly three competitor prices are required
    #[error("Expected exactly 3 competitor prices, got {0}")]
    WrongPriceCount(usize),

    /// Unknown build vs target status label
    #[error("Unknown build vs target status: {0:?}")]
    UnknownBuildStatus(String),

    /// Unknown buildpace label
    #[error("Unknown buildpace: {0:?}")]
    UnknownBuildPace(String),

    /// A configured multiplier was zero, negative or above the maximum
    #[error("Multiplier for ({build_status}, {buildpace}) must be above 0 and at most {max}, got {multiplier}")]
    InvalidMultiplier {
        build_status: String,
        buildpace: String,
        multiplier: Decimal,
        max: Decimal,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for PricingError {
    fn from(err: config::ConfigError) -> Self {
        PricingError::Configuration(err.to_string())
    }
}
