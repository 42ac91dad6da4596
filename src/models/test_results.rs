//! Counters produced by reducing case records.

use serde::{Deserialize, Serialize};

/// Case level and test level counters of a set of case records.
///
/// `cases*` count every record, `tests*` count distinct `(suite, case)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestResults {
    pub cases: i64,
    pub cases_skipped: i64,
    pub cases_failures: i64,
    pub cases_errors: i64,
    /// Sum of all case durations in seconds
    pub cases_time: f64,
    pub tests: i64,
    pub tests_skipped: i64,
    pub tests_failures: i64,
    pub tests_errors: i64,
}
