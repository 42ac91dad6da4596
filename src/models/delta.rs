//! Statistics annotated with differences against a reference run.

use serde::{Deserialize, Serialize};

/// A count with its optional difference to the reference.
///
/// `new` and `gone` are auxiliary counters rendered next to the delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numeric {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gone: Option<i64>,
}

impl Numeric {
    /// A count without reference.
    pub fn number(number: i64) -> Self {
        Numeric {
            number: Some(number),
            ..Default::default()
        }
    }

    /// A count with its difference to the reference.
    pub fn with_delta(number: i64, delta: i64) -> Self {
        Numeric {
            number: Some(number),
            delta: Some(delta),
            ..Default::default()
        }
    }
}

/// A duration in seconds with its optional difference to the reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<i64>,
}

impl DurationDelta {
    pub fn duration(duration: i64) -> Self {
        DurationDelta {
            duration: Some(duration),
            delta: None,
        }
    }

    pub fn with_delta(duration: i64, delta: i64) -> Self {
        DurationDelta {
            duration: Some(duration),
            delta: Some(delta),
        }
    }
}

/// Run statistics compared against a reference run.
///
/// Fields unknown in the current run are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTestRunDeltaStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suites: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationDelta>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests_succ: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests_skip: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests_fail: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests_error: Option<Numeric>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs_succ: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs_skip: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs_fail: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs_error: Option<Numeric>,

    /// Commit of the reference run
    #[serde(default)]
    pub reference_commit: Option<String>,
    /// What the reference is, e.g. "ancestor"
    pub reference_type: String,
}
