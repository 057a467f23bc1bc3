//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::{AppConfig, AppSettings, LogFormat, PricingConfig};
use crate::common::errors::{PricingError, Result};

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with PRICER__, e.g. PRICER__SETTINGS__LOG_LEVEL)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("PRICER")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    config
        .try_deserialize()
        .map_err(|e| PricingError::Configuration(e.to_string()))
}

/// Load configuration from individual environment variables only
///
/// Reads `PRICER_LOG_LEVEL`, `PRICER_LOG_FORMAT` and `PRICER_DECIMAL_PLACES`.
/// Multiplier overrides are only available through [`load_config`].
pub fn load_from_env() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    config_from_vars(|name| std::env::var(name).ok())
}

/// Build a config from a variable lookup, unset variables keep their defaults
fn config_from_vars<F>(lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = AppSettings::default();
    if let Some(level) = lookup("PRICER_LOG_LEVEL") {
        settings.log_level = level;
    }
    if let Some(format) = lookup("PRICER_LOG_FORMAT") {
        settings.log_format = match format.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "text" => LogFormat::Text,
            other => {
                return Err(PricingError::Configuration(format!(
                    "unknown log format: {}",
                    other
                )))
            }
        };
    }

    let mut pricing = PricingConfig::default();
    if let Some(places) = lookup("PRICER_DECIMAL_PLACES") {
        pricing.display_decimal_places = places.trim().parse().map_err(|_| {
            PricingError::Configuration(format!("invalid PRICER_DECIMAL_PLACES: {}", places))
        })?;
    }

    Ok(AppConfig { pricing, settings })
}
