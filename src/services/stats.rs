//! Canonical statistics and their comparison against a reference run.

use tracing::debug;

use crate::models::{
    DurationDelta, Numeric, UnitTestRunDeltaStats, UnitTestRunStats, UnitTestSuiteStats,
};

/// Number of successful items derived from a total and its non-successful parts.
///
/// Unknown parts count as zero as long as the total and at least one part
/// are known.
fn success_count(total: Option<i64>, parts: [Option<i64>; 3]) -> Option<i64> {
    let total = total?;
    if parts.iter().all(Option::is_none) {
        return None;
    }
    Some(total - parts.iter().map(|part| part.unwrap_or(0)).sum::<i64>())
}

/// Map sparse suite statistics onto the canonical field set.
pub fn get_stats(stats: &UnitTestSuiteStats) -> UnitTestRunStats {
    UnitTestRunStats {
        files: stats.files,
        suites: stats.suites,
        duration: stats.suite_time,

        tests: stats.tests,
        tests_succ: success_count(
            stats.tests,
            [stats.tests_skipped, stats.tests_failures, stats.tests_errors],
        ),
        tests_skip: stats.tests_skipped,
        tests_fail: stats.tests_failures,
        tests_error: stats.tests_errors,

        runs: stats.suite_tests,
        runs_succ: success_count(
            stats.suite_tests,
            [stats.suite_skipped, stats.suite_failures, stats.suite_errors],
        ),
        runs_skip: stats.suite_skipped,
        runs_fail: stats.suite_failures,
        runs_error: stats.suite_errors,

        commit: stats.commit.clone(),
    }
}

fn numeric_delta(current: Option<i64>, reference: Option<i64>) -> Option<Numeric> {
    current.map(|number| Numeric {
        number: Some(number),
        delta: reference.map(|reference| number - reference),
        ..Default::default()
    })
}

fn duration_delta(current: Option<i64>, reference: Option<i64>) -> Option<DurationDelta> {
    current.map(|duration| DurationDelta {
        duration: Some(duration),
        delta: reference.map(|reference| duration - reference),
    })
}

/// Annotate every known field of `stats` with its difference to `reference`.
///
/// Pass `UnitTestRunStats::default()` when no reference run is available;
/// the result then carries the current numbers without deltas.
pub fn get_stats_with_delta(
    stats: &UnitTestRunStats,
    reference: &UnitTestRunStats,
    reference_type: &str,
) -> UnitTestRunDeltaStats {
    debug!(
        "Comparing stats against {} commit {:?}",
        reference_type, reference.commit
    );

    UnitTestRunDeltaStats {
        files: numeric_delta(stats.files, reference.files),
        suites: numeric_delta(stats.suites, reference.suites),
        duration: duration_delta(stats.duration, reference.duration),

        tests: numeric_delta(stats.tests, reference.tests),
        tests_succ: numeric_delta(stats.tests_succ, reference.tests_succ),
        tests_skip: numeric_delta(stats.tests_skip, reference.tests_skip),
        tests_fail: numeric_delta(stats.tests_fail, reference.tests_fail),
        tests_error: numeric_delta(stats.tests_error, reference.tests_error),

        runs: numeric_delta(stats.runs, reference.runs),
        runs_succ: numeric_delta(stats.runs_succ, reference.runs_succ),
        runs_skip: numeric_delta(stats.runs_skip, reference.runs_skip),
        runs_fail: numeric_delta(stats.runs_fail, reference.runs_fail),
        runs_error: numeric_delta(stats.runs_error, reference.runs_error),

        reference_commit: reference.commit.clone(),
        reference_type: reference_type.to_string(),
    }
}
