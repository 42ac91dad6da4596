//! Loading of parsed results and reference stats from JSON files.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{ParsedResults, UnitTestRunStats};

fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> AppResult<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("Failed to read {} {:?}: {}", what, path, e)))?;

    serde_json::from_str(&content).map_err(|e| {
        AppError::InvalidInput(format!("Failed to parse {} {:?}: {}", what, path, e))
    })
}

/// Load parser output from a JSON file.
pub fn load_parsed_results(path: &Path) -> AppResult<ParsedResults> {
    let parsed: ParsedResults = load_json(path, "results")?;
    info!(
        "Loaded {} cases from {:?} ({:?} files, {:?} suites)",
        parsed.cases.len(),
        path,
        parsed.files,
        parsed.suites
    );
    Ok(parsed)
}

/// Load the stats of a reference run from a JSON file.
pub fn load_reference_stats(path: &Path) -> AppResult<UnitTestRunStats> {
    let stats: UnitTestRunStats = load_json(path, "reference stats")?;
    info!(
        "Loaded reference stats from {:?} (commit {:?})",
        path, stats.commit
    );
    Ok(stats)
}
