//! Raw and canonical run statistics.

use serde::{Deserialize, Serialize};

/// Sparse statistics of a run as assembled from parser and reducer output.
///
/// `suite_*` fields count runs (every case execution), `tests*` fields count
/// distinct tests. Any field may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitTestSuiteStats {
    pub files: Option<i64>,
    pub suites: Option<i64>,
    /// Total suite time in seconds
    pub suite_time: Option<i64>,
    pub suite_tests: Option<i64>,
    pub suite_skipped: Option<i64>,
    pub suite_failures: Option<i64>,
    pub suite_errors: Option<i64>,
    pub tests: Option<i64>,
    pub tests_skipped: Option<i64>,
    pub tests_failures: Option<i64>,
    pub tests_errors: Option<i64>,
    pub commit: Option<String>,
}

/// Canonical statistics of a run with derived success counts.
///
/// `None` means unknown, which is distinct from zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitTestRunStats {
    pub files: Option<i64>,
    pub suites: Option<i64>,
    /// Duration in seconds
    pub duration: Option<i64>,

    pub tests: Option<i64>,
    pub tests_succ: Option<i64>,
    pub tests_skip: Option<i64>,
    pub tests_fail: Option<i64>,
    pub tests_error: Option<i64>,

    pub runs: Option<i64>,
    pub runs_succ: Option<i64>,
    pub runs_skip: Option<i64>,
    pub runs_fail: Option<i64>,
    pub runs_error: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}
