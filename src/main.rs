//! CompetitorPricer - Main Entry Point
//!
//! Prints recommended sale prices as JSON for three competitor prices.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use competitor_pricer::cli::{run, Args};
use competitor_pricer::config::{load_config, LogFormat};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = load_config(Some(&args.config))?;
    let log_level = args
        .log_level
        .as_deref()
        .unwrap_or(&config.settings.log_level);
    init_logging(log_level, config.settings.log_format)?;

    info!("Configuration file: {}", args.config);

    let engine = config.build_engine()?;
    println!("{}", run(&args, &engine)?);
    Ok(())
}

/// Install the global subscriber; logs go to stderr so stdout stays JSON
fn init_logging(log_level: &str, format: LogFormat) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish())?,
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
    }

    Ok(())
}
