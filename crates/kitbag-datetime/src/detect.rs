//! Recognising common date/time layouts.
//!
//! | Example | Format |
//! |---------|--------|
//! | `2021-12-16 18:32:00.250` | `%Y-%m-%d %H:%M:%S%.3f` |
//! | `2021-12-16 18:32:00` | `%Y-%m-%d %H:%M:%S` |
//! | `12/16/2021 6:32 PM` | `%m/%d/%Y %I:%M %p` |
//! | `12/16/21 6:32 PM` | `%m/%d/%y %I:%M %p` |
//! | `2021-12-16` | `%Y-%m-%d` |
//! | `12/16/2021` | `%m/%d/%Y` |
//! | `16.12.2021` | `%d.%m.%Y` |
//! | `12/16/21` | `%m/%d/%y` |
//! | `16.12.21` | `%d.%m.%y` |
//! | `18:32:00` | `%H:%M:%S` |
//! | `6:32 PM` | `%I:%M %p` |
//!
//! Slashed dates are month first; dotted dates are day first.

use once_cell::sync::Lazy;
use regex::Regex;

/// Which components a detected layout carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    DateTime,
    Date,
    Time,
}

/// A recognised layout and the chrono format that parses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedFormat {
    format: &'static str,
    kind: FormatKind,
}

impl DetectedFormat {
    /// The chrono strftime format string.
    pub fn format(&self) -> &'static str {
        self.format
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }
}

static FORMATS: Lazy<Vec<(Regex, DetectedFormat)>> = Lazy::new(|| {
    [
        (r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}$", "%Y-%m-%d %H:%M:%S%.3f", FormatKind::DateTime),
        (r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$", "%Y-%m-%d %H:%M:%S", FormatKind::DateTime),
        (r"^\d{2}/\d{2}/\d{4} \d{1,2}:\d{2}\s(A|P)M$", "%m/%d/%Y %I:%M %p", FormatKind::DateTime),
        (r"^\d{2}/\d{2}/\d{2} \d{1,2}:\d{2}\s(A|P)M$", "%m/%d/%y %I:%M %p", FormatKind::DateTime),
        (r"^\d{4}-\d{2}-\d{2}$", "%Y-%m-%d", FormatKind::Date),
        (r"^\d{2}/\d{2}/\d{4}$", "%m/%d/%Y", FormatKind::Date),
        (r"^\d{2}\.\d{2}\.\d{4}$", "%d.%m.%Y", FormatKind::Date),
        (r"^\d{2}/\d{2}/\d{2}$", "%m/%d/%y", FormatKind::Date),
        (r"^\d{2}\.\d{2}\.\d{2}$", "%d.%m.%y", FormatKind::Date),
        (r"^\d{2}:\d{2}:\d{2}$", "%H:%M:%S", FormatKind::Time),
        (r"^\d{1,2}:\d{2}\s(A|P)M$", "%I:%M %p", FormatKind::Time),
    ]
    .into_iter()
    .map(|(pattern, format, kind)| {
        let regex = Regex::new(pattern).expect("date/time pattern is valid");
        (regex, DetectedFormat { format, kind })
    })
    .collect()
});

/// Finds the first known layout that `input` matches.
///
/// ```
/// use kitbag_datetime::{detect_format, FormatKind};
///
/// let detected = detect_format("12/16/21 6:32 PM").unwrap();
/// assert_eq!(detected.format(), "%m/%d/%y %I:%M %p");
/// assert_eq!(detected.kind(), FormatKind::DateTime);
/// assert!(detect_format("next tuesday").is_none());
/// ```
pub fn detect_format(input: &str) -> Option<DetectedFormat> {
    FORMATS
        .iter()
        .find(|(regex, _)| regex.is_match(input))
        .map(|(_, detected)| *detected)
}
