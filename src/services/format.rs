//! Locale aware rendering of counts and durations with aligned columns.
//!
//! Counts are right aligned to a column width computed by
//! [`get_formatted_digits`] over all values sharing the column, so rows with
//! and without deltas line up under every locale.

use crate::locale::NumberLocale;
use crate::models::{DurationInput, NumericInput};

/// Rendered in place of an unknown value.
pub const PLACEHOLDER: &str = "N/A";

fn char_width(s: &str) -> usize {
    s.chars().count()
}

fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Width of a magnitude once formatted, or of the placeholder when unknown.
fn magnitude_width(value: Option<i64>, locale: &NumberLocale) -> usize {
    value.map_or(char_width(PLACEHOLDER), |value| {
        char_width(&locale.format(value.abs()))
    })
}

/// Column widths `(number, delta)` needed to render all `values` aligned.
///
/// Bare and absent values only widen the number column. Annotated values
/// also widen the delta column, by the placeholder width when their delta
/// is unknown.
pub fn get_formatted_digits(values: &[NumericInput], locale: &NumberLocale) -> (usize, usize) {
    let number_digits = values
        .iter()
        .map(|value| magnitude_width(value.number(), locale))
        .max()
        .unwrap_or(0);

    let delta_digits = values
        .iter()
        .filter_map(|value| match value {
            NumericInput::WithDelta(numeric) => Some(magnitude_width(numeric.delta, locale)),
            _ => None,
        })
        .max()
        .unwrap_or(0);

    (number_digits, delta_digits)
}

fn sign(delta: i64) -> char {
    match delta {
        0 => '±',
        d if d > 0 => '+',
        _ => '-',
    }
}

/// Render a delta as sign plus magnitude right aligned to `digits`.
///
/// A width beyond the magnitude's own spaces the sign apart from the digits.
pub fn as_delta(delta: i64, digits: usize, locale: &NumberLocale) -> String {
    format!(
        "{}{}",
        sign(delta),
        right_align(&locale.format(delta.abs()), digits)
    )
}

fn with_label(value: String, label: &str) -> String {
    if label.is_empty() {
        value
    } else {
        format!("{} {}", value, label)
    }
}

/// Render a count with its unit label and, if present, its delta and the
/// `new`/`gone` counters in brackets.
///
/// An annotated value without count renders the placeholder only, without
/// unit label.
pub fn as_stat_number(
    value: &NumericInput,
    number_digits: usize,
    delta_digits: usize,
    label: &str,
    locale: &NumberLocale,
) -> String {
    match value {
        NumericInput::Absent => with_label(right_align(PLACEHOLDER, number_digits), label),
        NumericInput::Bare(number) => {
            with_label(right_align(&locale.format(*number), number_digits), label)
        }
        NumericInput::WithDelta(numeric) => {
            let number = match numeric.number {
                Some(number) => {
                    with_label(right_align(&locale.format(number), number_digits), label)
                }
                None => right_align(PLACEHOLDER, number_digits),
            };

            let extra = [
                numeric
                    .delta
                    .map(|delta| as_delta(delta, delta_digits, locale)),
                numeric.new.map(|new| format!("{} new", new)),
                numeric.gone.map(|gone| format!("{} gone", gone)),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

            if extra.is_empty() {
                number
            } else {
                format!("{} [{}]", number, extra.join(", "))
            }
        }
    }
}

/// Render seconds as `1h 2m 34s`, dropping zero hours and minutes.
fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{}s", seconds % 60));
    parts.join(" ")
}

/// Render a duration with its unit label and, if present, its delta in
/// brackets. Negative durations render by magnitude.
pub fn as_stat_duration(value: &DurationInput, label: &str) -> String {
    match value {
        DurationInput::Absent => with_label(PLACEHOLDER.to_string(), label),
        DurationInput::Bare(seconds) => {
            with_label(format_duration(seconds.unsigned_abs()), label)
        }
        DurationInput::WithDelta(duration) => {
            let current = as_stat_duration(&duration.duration.into(), label);
            match duration.delta {
                Some(delta) => format!(
                    "{} [{} {}]",
                    current,
                    sign(delta),
                    format_duration(delta.unsigned_abs())
                ),
                None => current,
            }
        }
    }
}
