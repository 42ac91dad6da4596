//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::locale::NumberLocale;

/// Default values used when the corresponding variable is not set.
pub mod defaults {
    pub const REFERENCE_TYPE: &str = "ancestor";
    pub const OUTPUT_FORMAT: &str = "long";
}

/// Rendering of the generated summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One-line Markdown summary
    Short,
    /// Multi-line Markdown summary
    Long,
    /// Canonical or delta stats as JSON
    Json,
}

impl OutputFormat {
    /// Parse output format from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "short" => Some(Self::Short),
            "long" | "md" | "markdown" => Some(Self::Long),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Check if this format renders Markdown.
    pub fn is_markdown(&self) -> bool {
        !matches!(self, Self::Json)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Short => write!(f, "short"),
            Self::Long => write!(f, "long"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding the parsed test results
    pub results_file: PathBuf,
    /// JSON file holding the reference run stats (optional)
    pub reference_file: Option<PathBuf>,
    /// Label describing the reference, e.g. "ancestor"
    pub reference_type: String,
    /// Commit the results belong to
    pub commit: Option<String>,
    /// Locale override for number formatting
    pub locale: Option<String>,
    /// Output rendering
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SUMMARY_RESULTS_FILE`: Parsed results JSON - REQUIRED
    /// - `SUMMARY_REFERENCE_FILE`: Reference stats JSON (optional)
    /// - `SUMMARY_REFERENCE_TYPE`: Reference label (default: ancestor)
    /// - `SUMMARY_COMMIT`: Commit SHA (default: `GITHUB_SHA` if set)
    /// - `SUMMARY_LOCALE`: Number locale override (default: `LC_ALL`/`LC_NUMERIC`/`LANG`)
    /// - `SUMMARY_FORMAT`: short, long or json (default: long)
    pub fn from_env() -> Result<Self, ConfigError> {
        let results_file = env::var("SUMMARY_RESULTS_FILE")
            .map(PathBuf::from)
            .map_err(|_| ConfigError::MissingEnvVar("SUMMARY_RESULTS_FILE"))?;

        let reference_file = env::var("SUMMARY_REFERENCE_FILE")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let reference_type = env::var("SUMMARY_REFERENCE_TYPE")
            .unwrap_or_else(|_| defaults::REFERENCE_TYPE.to_string());

        let commit = first_non_empty([
            env::var("SUMMARY_COMMIT").ok(),
            env::var("GITHUB_SHA").ok(),
        ]);

        let locale = env::var("SUMMARY_LOCALE").ok().filter(|s| !s.is_empty());

        let format_str =
            env::var("SUMMARY_FORMAT").unwrap_or_else(|_| defaults::OUTPUT_FORMAT.to_string());
        let format = OutputFormat::parse(&format_str).ok_or(ConfigError::InvalidValue(
            "SUMMARY_FORMAT must be 'short', 'long' or 'json'",
        ))?;

        let config = Config {
            results_file,
            reference_file,
            reference_type,
            commit,
            locale,
            format,
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate combinations the individual variables cannot express.
    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.reference_type.trim().is_empty() {
            errors.push("SUMMARY_REFERENCE_TYPE must not be empty.".to_string());
        }

        if self.reference_file.as_ref() == Some(&self.results_file) {
            errors.push(format!(
                "SUMMARY_REFERENCE_FILE points at the results file '{}'.",
                self.results_file.display()
            ));
        }

        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }

        Ok(())
    }

    /// Resolve the number locale, reading the process environment now when not overridden.
    pub fn number_locale(&self) -> NumberLocale {
        match self.locale {
            Some(ref name) => NumberLocale::parse(name),
            None => NumberLocale::from_env(),
        }
    }
}

/// First value that is set and not empty, so an empty variable falls through.
fn first_non_empty<I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    values.into_iter().flatten().find(|s| !s.is_empty())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}
