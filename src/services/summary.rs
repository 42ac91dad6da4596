//! Markdown summaries of run statistics.

use crate::locale::NumberLocale;
use crate::models::{NumericInput, SummaryStats};
use crate::services::format::{as_stat_duration, as_stat_number, get_formatted_digits};

pub const SUMMARY_TITLE: &str = "## Unit Test Results";

const SUCCESS_ICON: &str = ":heavy_check_mark:";
const SKIP_ICON: &str = ":zzz:";
const FAIL_ICON: &str = ":heavy_multiplication_x:";
const ERROR_ICON: &str = ":fire:";
const DURATION_ICON: &str = ":stopwatch:";

/// Length of the abbreviated reference commit in the footnote.
const COMMIT_ABBREV_LEN: usize = 8;

/// Render a value aligned only against itself.
fn standalone(value: &NumericInput, label: &str, locale: &NumberLocale) -> String {
    let (digits, delta_digits) = get_formatted_digits(std::slice::from_ref(value), locale);
    as_stat_number(value, digits, delta_digits, label, locale)
}

/// One-line summary of the test level counts.
pub fn get_short_summary_md(stats: &SummaryStats, locale: &NumberLocale) -> String {
    [
        standalone(&stats.tests, "tests", locale),
        standalone(&stats.tests_succ, SUCCESS_ICON, locale),
        standalone(&stats.tests_skip, SKIP_ICON, locale),
        standalone(&stats.tests_fail, FAIL_ICON, locale),
        standalone(&stats.tests_error, ERROR_ICON, locale),
    ]
    .join(" ")
}

/// Multi-line summary with files, tests and runs lines.
///
/// Values sharing a column across lines are aligned. A footnote names the
/// reference commit when the stats were compared against one.
pub fn get_long_summary_md(stats: &SummaryStats, locale: &NumberLocale) -> String {
    let (files_digits, files_delta_digits) =
        get_formatted_digits(&[stats.files, stats.tests, stats.runs], locale);
    let (suites_digits, suites_delta_digits) =
        get_formatted_digits(std::slice::from_ref(&stats.suites), locale);
    let (success_digits, success_delta_digits) =
        get_formatted_digits(&[stats.tests_succ, stats.runs_succ], locale);
    let (skip_digits, skip_delta_digits) =
        get_formatted_digits(&[stats.tests_skip, stats.runs_skip], locale);
    let (fail_digits, fail_delta_digits) =
        get_formatted_digits(&[stats.tests_fail, stats.runs_fail], locale);
    let (error_digits, error_delta_digits) =
        get_formatted_digits(&[stats.tests_error, stats.runs_error], locale);

    let misc_line = format!(
        "{} {} {}\n",
        as_stat_number(&stats.files, files_digits, files_delta_digits, "files ", locale),
        as_stat_number(&stats.suites, suites_digits, suites_delta_digits, "suites", locale),
        as_stat_duration(&stats.duration, DURATION_ICON),
    );

    let counts_line = |total: &NumericInput,
                       label: &str,
                       succ: &NumericInput,
                       skip: &NumericInput,
                       fail: &NumericInput,
                       error: &NumericInput| {
        format!(
            "{} {} {} {} {}\n",
            as_stat_number(total, files_digits, files_delta_digits, label, locale),
            as_stat_number(succ, success_digits, success_delta_digits, SUCCESS_ICON, locale),
            as_stat_number(skip, skip_digits, skip_delta_digits, SKIP_ICON, locale),
            as_stat_number(fail, fail_digits, fail_delta_digits, FAIL_ICON, locale),
            as_stat_number(error, error_digits, error_delta_digits, ERROR_ICON, locale),
        )
    };

    let tests_line = counts_line(
        &stats.tests,
        "tests",
        &stats.tests_succ,
        &stats.tests_skip,
        &stats.tests_fail,
        &stats.tests_error,
    );
    let runs_line = counts_line(
        &stats.runs,
        "runs ",
        &stats.runs_succ,
        &stats.runs_skip,
        &stats.runs_fail,
        &stats.runs_error,
    );

    let reference = match (&stats.reference_type, &stats.reference_commit) {
        (Some(reference_type), Some(commit)) if !reference_type.is_empty() => format!(
            "\n[±] comparison against {} commit {}",
            reference_type,
            commit.chars().take(COMMIT_ABBREV_LEN).collect::<String>()
        ),
        _ => String::new(),
    };

    format!(
        "{}\n{}{}{}{}",
        SUMMARY_TITLE, misc_line, tests_line, runs_line, reference
    )
}
