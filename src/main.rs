//! Unit test summary - Main entry point.
//!
//! Reads parsed test results, optionally compares them against a reference
//! run, and prints the summary to stdout.

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use unit_test_summary::config::{Config, OutputFormat};
use unit_test_summary::error::AppResult;
use unit_test_summary::models::SummaryStats;
use unit_test_summary::services;

fn run(config: &Config) -> AppResult<String> {
    let parsed = services::load_parsed_results(&config.results_file)?;
    let results = services::get_test_results(&parsed);
    let suite_stats = services::build_suite_stats(&parsed, &results, config.commit.as_deref());
    let stats = services::get_stats(&suite_stats);

    let summary = match config.reference_file {
        Some(ref path) => {
            let reference = services::load_reference_stats(path)?;
            let delta_stats =
                services::get_stats_with_delta(&stats, &reference, &config.reference_type);
            if !config.format.is_markdown() {
                return Ok(serde_json::to_string_pretty(&delta_stats)?);
            }
            SummaryStats::from(&delta_stats)
        }
        None => {
            if !config.format.is_markdown() {
                return Ok(serde_json::to_string_pretty(&stats)?);
            }
            SummaryStats::from(&stats)
        }
    };

    let locale = config.number_locale();
    info!("Rendering {} summary with locale {}", config.format, locale.name());

    Ok(match config.format {
        OutputFormat::Short => services::get_short_summary_md(&summary, &locale),
        _ => services::get_long_summary_md(&summary, &locale),
    })
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging on stderr, stdout carries the summary
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - SUMMARY_RESULTS_FILE must point at the parsed results JSON");
            error!("  - SUMMARY_FORMAT must be 'short', 'long' or 'json'");
            std::process::exit(1);
        }
    };

    match run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Failed to generate summary: {}", e);
            std::process::exit(1);
        }
    }
}
