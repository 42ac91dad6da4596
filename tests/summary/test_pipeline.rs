//! End-to-end summary generation.

use unit_test_summary::locale::NumberLocale;
use unit_test_summary::models::{CaseOutcome, ParsedResults, SummaryStats, UnitTestRunStats};
use unit_test_summary::services::{
    build_suite_stats, get_long_summary_md, get_short_summary_md, get_stats,
    get_stats_with_delta, get_test_results,
};

use crate::test_helpers::{push_runs, ten_file_results};

fn current_stats(parsed: &ParsedResults, commit: Option<&str>) -> UnitTestRunStats {
    let results = get_test_results(parsed);
    get_stats(&build_suite_stats(parsed, &results, commit))
}

#[test]
fn test_ten_files_long_summary() {
    let parsed = ten_file_results();
    assert_eq!(parsed.cases.len(), 373);

    let stats = current_stats(&parsed, None);
    let md = get_long_summary_md(&SummaryStats::from(&stats), &NumberLocale::posix());

    assert_eq!(
        md,
        "## Unit Test Results\n\
         \x2010 files  10 suites 39m 1s :stopwatch:\n\
         217 tests 208 :heavy_check_mark:  9 :zzz: 0 :heavy_multiplication_x: 0 :fire:\n\
         373 runs  333 :heavy_check_mark: 40 :zzz: 0 :heavy_multiplication_x: 0 :fire:\n"
    );
}

#[test]
fn test_ten_files_short_summary() {
    let stats = current_stats(&ten_file_results(), None);

    assert_eq!(
        get_short_summary_md(&SummaryStats::from(&stats), &NumberLocale::posix()),
        "217 tests 208 :heavy_check_mark: 9 :zzz: 0 :heavy_multiplication_x: 0 :fire:"
    );
}

#[test]
fn test_comparison_against_reference_run() {
    let reference = current_stats(&ten_file_results(), Some("fedcba9876543210"));

    let mut parsed = ten_file_results();
    push_runs(&mut parsed.cases, "suite0", "broken", CaseOutcome::Failure, 1, 2.0);
    parsed.suite_time = Some(39 * 60 + 11);
    let stats = current_stats(&parsed, Some("0123456789abcdef"));

    let delta = get_stats_with_delta(&stats, &reference, "ancestor");
    assert_eq!(delta.reference_commit.as_deref(), Some("fedcba9876543210"));

    let md = get_long_summary_md(&SummaryStats::from(&delta), &NumberLocale::posix());
    assert_eq!(
        md,
        "## Unit Test Results\n\
         \x2010 files  [±0] 10 suites [±0] 39m 11s :stopwatch: [+ 10s]\n\
         218 tests [+1] 208 :heavy_check_mark: [±0]  9 :zzz: [±0] 1 :heavy_multiplication_x: [+1] 0 :fire: [±0]\n\
         374 runs  [+1] 333 :heavy_check_mark: [±0] 40 :zzz: [±0] 1 :heavy_multiplication_x: [+1] 0 :fire: [±0]\n\
         \n\
         [±] comparison against ancestor commit fedcba98"
    );
}

#[test]
fn test_grouping_follows_locale_per_call() {
    let mut parsed = ten_file_results();
    for i in 0..1000 {
        push_runs(&mut parsed.cases, "bulk", &format!("bulk{}", i), CaseOutcome::Success, 1, 0.0);
    }
    let summary = SummaryStats::from(&current_stats(&parsed, None));

    let plain = get_short_summary_md(&summary, &NumberLocale::posix());
    let english = get_short_summary_md(&summary, &NumberLocale::parse("en_US.UTF-8"));
    let german = get_short_summary_md(&summary, &NumberLocale::parse("de_DE.UTF-8"));

    assert!(plain.starts_with("1217 tests 1208 :heavy_check_mark:"));
    assert!(english.starts_with("1,217 tests 1,208 :heavy_check_mark:"));
    assert!(german.starts_with("1.217 tests 1.208 :heavy_check_mark:"));
}

#[test]
fn test_empty_results() {
    let stats = current_stats(&ParsedResults::default(), None);

    assert_eq!(stats.tests, Some(0));
    assert_eq!(stats.tests_succ, Some(0));
    assert_eq!(stats.runs, Some(0));
    assert_eq!(stats.duration, Some(0));
    assert_eq!(stats.files, None);

    let md = get_long_summary_md(&SummaryStats::from(&stats), &NumberLocale::posix());
    assert!(md.starts_with("## Unit Test Results\nN/A files  N/A suites 0s :stopwatch:\n"));
}
