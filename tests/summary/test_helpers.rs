//! Builders for synthetic parser output.

use unit_test_summary::models::{CaseOutcome, CaseRecord, ParsedResults};

/// Append `runs` executions of the test `suite::name` with the given outcome.
pub fn push_runs(
    cases: &mut Vec<CaseRecord>,
    suite: &str,
    name: &str,
    outcome: CaseOutcome,
    runs: usize,
    duration: f64,
) {
    for _ in 0..runs {
        cases.push(CaseRecord::new(suite, name, outcome, duration));
    }
}

/// Ten report files worth of results: 217 tests, 9 of them skipped, run
/// 373 times in total with 40 skipped runs.
pub fn ten_file_results() -> ParsedResults {
    let mut cases = Vec::new();

    for i in 0..208 {
        let suite = format!("suite{}", i % 10);
        let runs = if i < 125 { 2 } else { 1 };
        push_runs(&mut cases, &suite, &format!("test{}", i), CaseOutcome::Success, runs, 1.0);
    }
    for i in 0..9 {
        let suite = format!("suite{}", i % 10);
        let runs = if i < 4 { 5 } else { 4 };
        push_runs(&mut cases, &suite, &format!("skipped{}", i), CaseOutcome::Skipped, runs, 0.0);
    }

    ParsedResults {
        files: Some(10),
        suites: Some(10),
        suite_time: Some(39 * 60 + 1),
        cases,
        ..Default::default()
    }
}
