//! Formatter inputs: a value is either unknown, a bare number, or a number
//! annotated with its difference to a reference.

use super::delta::{DurationDelta, Numeric, UnitTestRunDeltaStats};
use super::stats::UnitTestRunStats;

/// A count as accepted by the number formatters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericInput {
    #[default]
    Absent,
    Bare(i64),
    WithDelta(Numeric),
}

impl NumericInput {
    /// The count itself, if known.
    pub fn number(&self) -> Option<i64> {
        match self {
            Self::Absent => None,
            Self::Bare(number) => Some(*number),
            Self::WithDelta(numeric) => numeric.number,
        }
    }

    pub fn delta(&self) -> Option<i64> {
        match self {
            Self::WithDelta(numeric) => numeric.delta,
            _ => None,
        }
    }
}

impl From<i64> for NumericInput {
    fn from(number: i64) -> Self {
        Self::Bare(number)
    }
}

impl From<Option<i64>> for NumericInput {
    fn from(number: Option<i64>) -> Self {
        number.map_or(Self::Absent, Self::Bare)
    }
}

impl From<Numeric> for NumericInput {
    fn from(numeric: Numeric) -> Self {
        Self::WithDelta(numeric)
    }
}

impl From<Option<Numeric>> for NumericInput {
    fn from(numeric: Option<Numeric>) -> Self {
        numeric.map_or(Self::Absent, Self::WithDelta)
    }
}

/// A duration in seconds as accepted by the duration formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DurationInput {
    #[default]
    Absent,
    Bare(i64),
    WithDelta(DurationDelta),
}

impl From<i64> for DurationInput {
    fn from(seconds: i64) -> Self {
        Self::Bare(seconds)
    }
}

impl From<Option<i64>> for DurationInput {
    fn from(seconds: Option<i64>) -> Self {
        seconds.map_or(Self::Absent, Self::Bare)
    }
}

impl From<DurationDelta> for DurationInput {
    fn from(duration: DurationDelta) -> Self {
        Self::WithDelta(duration)
    }
}

impl From<Option<DurationDelta>> for DurationInput {
    fn from(duration: Option<DurationDelta>) -> Self {
        duration.map_or(Self::Absent, Self::WithDelta)
    }
}

/// Everything the summary renderers read, with or without reference deltas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryStats {
    pub files: NumericInput,
    pub suites: NumericInput,
    pub duration: DurationInput,

    pub tests: NumericInput,
    pub tests_succ: NumericInput,
    pub tests_skip: NumericInput,
    pub tests_fail: NumericInput,
    pub tests_error: NumericInput,

    pub runs: NumericInput,
    pub runs_succ: NumericInput,
    pub runs_skip: NumericInput,
    pub runs_fail: NumericInput,
    pub runs_error: NumericInput,

    pub reference_commit: Option<String>,
    pub reference_type: Option<String>,
}

impl From<&UnitTestRunStats> for SummaryStats {
    fn from(stats: &UnitTestRunStats) -> Self {
        SummaryStats {
            files: stats.files.into(),
            suites: stats.suites.into(),
            duration: stats.duration.into(),
            tests: stats.tests.into(),
            tests_succ: stats.tests_succ.into(),
            tests_skip: stats.tests_skip.into(),
            tests_fail: stats.tests_fail.into(),
            tests_error: stats.tests_error.into(),
            runs: stats.runs.into(),
            runs_succ: stats.runs_succ.into(),
            runs_skip: stats.runs_skip.into(),
            runs_fail: stats.runs_fail.into(),
            runs_error: stats.runs_error.into(),
            reference_commit: None,
            reference_type: None,
        }
    }
}

impl From<&UnitTestRunDeltaStats> for SummaryStats {
    fn from(stats: &UnitTestRunDeltaStats) -> Self {
        SummaryStats {
            files: stats.files.into(),
            suites: stats.suites.into(),
            duration: stats.duration.into(),
            tests: stats.tests.into(),
            tests_succ: stats.tests_succ.into(),
            tests_skip: stats.tests_skip.into(),
            tests_fail: stats.tests_fail.into(),
            tests_error: stats.tests_error.into(),
            runs: stats.runs.into(),
            runs_succ: stats.runs_succ.into(),
            runs_skip: stats.runs_skip.into(),
            runs_fail: stats.runs_fail.into(),
            runs_error: stats.runs_error.into(),
            reference_commit: stats.reference_commit.clone(),
            reference_type: Some(stats.reference_type.clone()),
        }
    }
}
