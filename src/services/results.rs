//! Reduction of case records into case level and test level counters.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{CaseOutcome, ParsedResults, TestResults, UnitTestSuiteStats};

/// Outcomes seen across all executions of one test.
#[derive(Debug, Default)]
struct TestOutcomes {
    success: bool,
    skipped: bool,
    failure: bool,
    error: bool,
}

impl TestOutcomes {
    fn record(&mut self, outcome: CaseOutcome) {
        match outcome {
            CaseOutcome::Success => self.success = true,
            CaseOutcome::Skipped => self.skipped = true,
            CaseOutcome::Failure => self.failure = true,
            CaseOutcome::Error => self.error = true,
        }
    }

    /// Skipped only when no execution did anything but skip.
    fn is_skipped(&self) -> bool {
        self.skipped && !self.success && !self.failure && !self.error
    }

    fn is_failure(&self) -> bool {
        !self.success && self.failure
    }

    fn is_error(&self) -> bool {
        !self.success && self.error
    }
}

/// Count cases and distinct tests of the parsed results.
///
/// Every case record counts once by its own outcome. Records sharing suite
/// and case name form a single test whose outcome follows the precedence
/// success > failure/error > skipped; a test that failed and errored across
/// reruns counts towards both.
pub fn get_test_results(parsed: &ParsedResults) -> TestResults {
    let mut results = TestResults::default();
    let mut tests: HashMap<(&str, &str), TestOutcomes> = HashMap::new();

    for case in &parsed.cases {
        results.cases += 1;
        results.cases_time += case.duration;
        match case.outcome {
            CaseOutcome::Success => {}
            CaseOutcome::Skipped => results.cases_skipped += 1,
            CaseOutcome::Failure => results.cases_failures += 1,
            CaseOutcome::Error => results.cases_errors += 1,
        }

        tests
            .entry((case.suite_name.as_str(), case.case_name.as_str()))
            .or_default()
            .record(case.outcome);
    }

    for outcomes in tests.values() {
        results.tests += 1;
        if outcomes.is_skipped() {
            results.tests_skipped += 1;
        }
        if outcomes.is_failure() {
            results.tests_failures += 1;
        }
        if outcomes.is_error() {
            results.tests_errors += 1;
        }
    }

    debug!(
        "Reduced {} cases into {} tests ({} skipped, {} failed, {} errored)",
        results.cases,
        results.tests,
        results.tests_skipped,
        results.tests_failures,
        results.tests_errors
    );

    results
}

/// Combine the parser's suite counters with the reduced test counters.
///
/// Suite level counters the parser did not provide are taken from the case
/// counters.
pub fn build_suite_stats(
    parsed: &ParsedResults,
    results: &TestResults,
    commit: Option<&str>,
) -> UnitTestSuiteStats {
    UnitTestSuiteStats {
        files: parsed.files,
        suites: parsed.suites,
        suite_time: parsed
            .suite_time
            .or(Some(results.cases_time.round() as i64)),
        suite_tests: parsed.suite_tests.or(Some(results.cases)),
        suite_skipped: parsed.suite_skipped.or(Some(results.cases_skipped)),
        suite_failures: parsed.suite_failures.or(Some(results.cases_failures)),
        suite_errors: parsed.suite_errors.or(Some(results.cases_errors)),
        tests: Some(results.tests),
        tests_skipped: Some(results.tests_skipped),
        tests_failures: Some(results.tests_failures),
        tests_errors: Some(results.tests_errors),
        commit: commit.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CaseRecord;

    fn case(suite: &str, name: &str, outcome: &str, duration: f64) -> CaseRecord {
        CaseRecord::new(suite, name, CaseOutcome::parse(outcome).unwrap(), duration)
    }

    #[test]
    fn test_no_cases() {
        let results = get_test_results(&ParsedResults::from_cases(vec![]));
        assert_eq!(results, TestResults::default());
        assert_eq!(results.cases_time, 0.0);
    }

    #[test]
    fn test_distinct_cases() {
        let results = get_test_results(&ParsedResults::from_cases(vec![
            case("class1", "test1", "success", 1.0),
            case("class1", "test2", "skipped", 2.0),
            case("class1", "test3", "failure", 3.0),
            case("class2", "test1", "error", 4.0),
            case("class2", "test2", "skipped", 5.0),
            case("class2", "test3", "failure", 6.0),
            case("class2", "test4", "failure", 7.0),
        ]));

        assert_eq!(
            results,
            TestResults {
                cases: 7,
                cases_skipped: 2,
                cases_failures: 3,
                cases_errors: 1,
                cases_time: 28.0,
                tests: 7,
                tests_skipped: 2,
                tests_failures: 3,
                tests_errors: 1,
            }
        );
    }

    #[test]
    fn test_reruns_follow_outcome_precedence() {
        let results = get_test_results(&ParsedResults::from_cases(vec![
            case("class1", "test1", "success", 2.0),
            case("class1", "test1", "success", 2.0),
            // success has precedence over skipped
            case("class1", "test2", "success", 2.0),
            case("class1", "test2", "skipped", 2.0),
            // only skipped when every run is skipped
            case("class1", "test3", "skipped", 2.0),
            case("class1", "test3", "skipped", 2.0),
            // success has precedence over failure and error
            case("class1", "test4", "success", 2.0),
            case("class1", "test4", "failure", 2.0),
            case("class1", "test5", "success", 2.0),
            case("class1", "test5", "error", 2.0),
        ]));

        assert_eq!(
            results,
            TestResults {
                cases: 10,
                cases_skipped: 3,
                cases_failures: 1,
                cases_errors: 1,
                cases_time: 20.0,
                tests: 5,
                tests_skipped: 1,
                tests_failures: 0,
                tests_errors: 0,
            }
        );
    }

    #[test]
    fn test_successful_rerun_is_never_failed_errored_or_skipped() {
        let reruns = [
            ["success", "failure"],
            ["failure", "success"],
            ["success", "error"],
            ["error", "success"],
            ["skipped", "success"],
        ];

        for outcomes in reruns {
            let results = get_test_results(&ParsedResults::from_cases(
                outcomes
                    .iter()
                    .map(|outcome| case("class1", "test1", outcome, 1.0))
                    .collect(),
            ));

            assert_eq!(results.tests, 1, "{:?}", outcomes);
            assert_eq!(results.tests_skipped, 0, "{:?}", outcomes);
            assert_eq!(results.tests_failures, 0, "{:?}", outcomes);
            assert_eq!(results.tests_errors, 0, "{:?}", outcomes);
            assert_eq!(results.cases, 2, "{:?}", outcomes);
        }
    }

    #[test]
    fn test_failing_reruns_count_towards_failures_and_errors() {
        let results = get_test_results(&ParsedResults::from_cases(vec![
            case("class1", "test1", "failure", 1.0),
            case("class1", "test1", "error", 1.0),
            case("class1", "test1", "skipped", 1.0),
        ]));

        assert_eq!(results.tests, 1);
        assert_eq!(results.tests_skipped, 0);
        assert_eq!(results.tests_failures, 1);
        assert_eq!(results.tests_errors, 1);
    }

    #[test]
    fn test_same_case_name_in_different_suites_are_distinct_tests() {
        let results = get_test_results(&ParsedResults::from_cases(vec![
            case("class1", "test", "skipped", 0.5),
            case("class2", "test", "success", 0.25),
        ]));

        assert_eq!(results.tests, 2);
        assert_eq!(results.tests_skipped, 1);
        assert_eq!(results.cases_time, 0.75);
    }

    #[test]
    fn test_build_suite_stats_prefers_parser_counters() {
        let parsed = ParsedResults {
            files: Some(1),
            suites: Some(2),
            suite_time: Some(30),
            suite_tests: Some(5),
            suite_skipped: Some(1),
            suite_failures: None,
            suite_errors: None,
            cases: vec![
                case("class1", "test1", "success", 1.4),
                case("class1", "test2", "failure", 1.4),
            ],
        };
        let results = get_test_results(&parsed);

        let stats = build_suite_stats(&parsed, &results, Some("abc"));
        assert_eq!(stats.files, Some(1));
        assert_eq!(stats.suites, Some(2));
        assert_eq!(stats.suite_time, Some(30));
        assert_eq!(stats.suite_tests, Some(5));
        assert_eq!(stats.suite_skipped, Some(1));
        assert_eq!(stats.suite_failures, Some(1));
        assert_eq!(stats.suite_errors, Some(0));
        assert_eq!(stats.tests, Some(2));
        assert_eq!(stats.tests_failures, Some(1));
        assert_eq!(stats.commit.as_deref(), Some("abc"));

        let parsed = ParsedResults::from_cases(parsed.cases);
        let stats = build_suite_stats(&parsed, &results, None);
        assert_eq!(stats.files, None);
        assert_eq!(stats.suite_time, Some(3));
        assert_eq!(stats.suite_tests, Some(2));
        assert_eq!(stats.commit, None);
    }
}
