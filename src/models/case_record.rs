//! Case record model representing one executed test attempt.

use serde::{Deserialize, Serialize};

/// Outcome of a single test case execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseOutcome {
    Success,
    Skipped,
    Failure,
    Error,
}

impl CaseOutcome {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Skipped => "skipped",
            Self::Failure => "failure",
            Self::Error => "error",
        }
    }

    /// Parse from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Self::Success),
            "skipped" => Some(Self::Skipped),
            "failure" => Some(Self::Failure),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One execution of a test case. Reruns produce several records with the
/// same suite and case name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Name of the suite (usually the test class)
    pub suite_name: String,
    /// Name of the test case within the suite
    pub case_name: String,
    /// Execution outcome
    pub outcome: CaseOutcome,
    /// Execution duration in seconds
    #[serde(default)]
    pub duration: f64,
}

impl CaseRecord {
    /// Create a new case record.
    pub fn new(
        suite_name: impl Into<String>,
        case_name: impl Into<String>,
        outcome: CaseOutcome,
        duration: f64,
    ) -> Self {
        CaseRecord {
            suite_name: suite_name.into(),
            case_name: case_name.into(),
            outcome,
            duration,
        }
    }
}

/// Results handed over by a report parser: suite level counters as found in
/// the report files, plus every case record in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedResults {
    /// Number of report files parsed
    pub files: Option<i64>,
    /// Number of test suites found
    pub suites: Option<i64>,
    /// Total suite time in seconds
    pub suite_time: Option<i64>,
    /// Number of cases declared by the suites
    pub suite_tests: Option<i64>,
    /// Number of skipped cases declared by the suites
    pub suite_skipped: Option<i64>,
    /// Number of failed cases declared by the suites
    pub suite_failures: Option<i64>,
    /// Number of errored cases declared by the suites
    pub suite_errors: Option<i64>,
    /// Every case record
    pub cases: Vec<CaseRecord>,
}

impl ParsedResults {
    /// Wrap bare case records without any suite level counters.
    pub fn from_cases(cases: Vec<CaseRecord>) -> Self {
        ParsedResults {
            cases,
            ..Default::default()
        }
    }
}
