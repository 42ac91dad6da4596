//! Number locale resolution.
//!
//! Only digit grouping is locale dependent in the rendered summaries, so a
//! locale boils down to an optional thousands separator. Names follow the
//! POSIX `language[_territory][.codeset][@modifier]` form.

use std::env;

/// Environment variables consulted for the numeric locale, highest precedence first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Narrow no-break space, the group separator of most continental European locales.
const NARROW_NBSP: char = '\u{202f}';

/// Digit grouping rules of a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLocale {
    name: String,
    thousands_separator: Option<char>,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::posix()
    }
}

impl NumberLocale {
    /// The `C`/`POSIX` locale, which does not group digits.
    pub fn posix() -> Self {
        NumberLocale {
            name: "C".to_string(),
            thousands_separator: None,
        }
    }

    /// Resolve a POSIX locale name such as `en_US.UTF-8` or `de_DE@euro`.
    ///
    /// Unknown languages fall back to no grouping.
    pub fn parse(name: &str) -> Self {
        let base = name
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();
        let mut parts = base.split(['_', '-']);
        let language = parts.next().unwrap_or_default().to_lowercase();
        let territory = parts.next().unwrap_or_default().to_uppercase();

        let separator = match (language.as_str(), territory.as_str()) {
            ("" | "c" | "posix", _) => None,
            ("de" | "it" | "rm", "CH" | "LI") => Some('\u{2019}'),
            ("en" | "ja" | "zh" | "ko" | "th" | "he" | "ga" | "mt" | "ms" | "fil" | "hi", _) => {
                Some(',')
            }
            (
                "de" | "nl" | "it" | "es" | "pt" | "da" | "id" | "tr" | "el" | "ro" | "sl" | "hr"
                | "sr" | "vi" | "is",
                _,
            ) => Some('.'),
            (
                "fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "nn" | "no" | "uk" | "bg"
                | "hu" | "et" | "lv" | "lt" | "be" | "kk",
                _,
            ) => Some(NARROW_NBSP),
            _ => None,
        };

        NumberLocale {
            name: name.to_string(),
            thousands_separator: separator,
        }
    }

    /// Read the numeric locale from the process environment.
    ///
    /// Evaluated on every call so that changes to the environment take effect
    /// immediately.
    pub fn from_env() -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// Locale name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn thousands_separator(&self) -> Option<char> {
        self.thousands_separator
    }

    /// Format an integer with this locale's digit grouping.
    pub fn format(&self, number: i64) -> String {
        let digits = number.unsigned_abs().to_string();
        let sign = if number < 0 { "-" } else { "" };

        let Some(separator) = self.thousands_separator else {
            return format!("{}{}", sign, digits);
        };

        let mut grouped = String::with_capacity(digits.len() * 2);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(digit);
        }
        format!("{}{}", sign, grouped)
    }
}
