//! A date/time value that remembers how it should be displayed.

use std::fmt;

use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};

use crate::detect::{detect_format, DetectedFormat, FormatKind};
use crate::error::{DateTimeError, Result};

/// A timestamp with optional default date and time formats.
///
/// Formats are chrono strftime strings and are checked when set, so
/// [`Display`](fmt::Display) never meets an invalid directive. Display
/// renders `date_format`, followed by a space and `time_format` when both
/// are set; without a date format it renders nothing.
///
/// # Example
///
/// ```
/// use kitbag_datetime::DateTime;
///
/// let dt = DateTime::create("12/16/21 6:32 PM", Some("%Y-%m-%d"), Some("%H:%M:%S")).unwrap();
/// assert_eq!(dt.to_string(), "2021-12-16 18:32:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    value: chrono::DateTime<FixedOffset>,
    date_format: Option<String>,
    time_format: Option<String>,
}

impl DateTime {
    /// Wraps a chrono value with no default formats.
    pub fn new(value: chrono::DateTime<FixedOffset>) -> Self {
        Self {
            value,
            date_format: None,
            time_format: None,
        }
    }

    /// The current local time.
    pub fn now() -> Self {
        Self::new(Local::now().fixed_offset())
    }

    /// Parses `input` and applies the given default formats.
    ///
    /// See [`parse`](Self::parse) for the accepted inputs.
    pub fn create(input: &str, date_format: Option<&str>, time_format: Option<&str>) -> Result<Self> {
        let mut dt = Self::parse(input)?;
        if let Some(format) = date_format {
            dt.set_date_format(format)?;
        }
        if let Some(format) = time_format {
            dt.set_time_format(format)?;
        }
        Ok(dt)
    }

    /// Parses `input` as UTC.
    ///
    /// Accepts `"now"`, any layout known to [`detect_format`] and RFC 3339.
    /// Time-only layouts are placed on the current date.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_in(input, Utc.fix())
    }

    /// Parses `input`, reading offset-less layouts in `offset`.
    pub fn parse_in(input: &str, offset: FixedOffset) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("now") {
            return Ok(Self::new(Utc::now().with_timezone(&offset)));
        }
        if let Some(detected) = detect_format(trimmed) {
            let today = Utc::now().with_timezone(&offset).date_naive();
            let naive = parse_naive(trimmed, detected, today)?;
            let value = offset
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| out_of_range(trimmed, detected.format()))?;
            return Ok(Self::new(value));
        }
        chrono::DateTime::parse_from_rfc3339(trimmed)
            .map(Self::new)
            .map_err(|_| DateTimeError::Unrecognized(input.to_string()))
    }

    /// Builds a value from a Unix timestamp, in UTC.
    pub fn from_timestamp(seconds: i64) -> Option<Self> {
        chrono::DateTime::from_timestamp(seconds, 0).map(|dt| Self::new(dt.fixed_offset()))
    }

    pub fn value(&self) -> &chrono::DateTime<FixedOffset> {
        &self.value
    }

    pub fn into_inner(self) -> chrono::DateTime<FixedOffset> {
        self.value
    }

    /// Sets the default date format. An empty string clears it.
    pub fn set_date_format(&mut self, format: &str) -> Result<&mut Self> {
        self.date_format = checked_format(format)?;
        Ok(self)
    }

    pub fn date_format(&self) -> Option<&str> {
        self.date_format.as_deref()
    }

    pub fn has_date_format(&self) -> bool {
        self.date_format.is_some()
    }

    /// Sets the default time format. An empty string clears it.
    pub fn set_time_format(&mut self, format: &str) -> Result<&mut Self> {
        self.time_format = checked_format(format)?;
        Ok(self)
    }

    pub fn time_format(&self) -> Option<&str> {
        self.time_format.as_deref()
    }

    pub fn has_time_format(&self) -> bool {
        self.time_format.is_some()
    }

    /// Formats with an arbitrary strftime string.
    pub fn format(&self, format: &str) -> Result<String> {
        validate_format(format)?;
        Ok(self.value.format(format).to_string())
    }

    fn default_format(&self) -> Option<String> {
        let date = self.date_format.as_deref()?;
        Some(match self.time_format.as_deref() {
            Some(time) => format!("{} {}", date, time),
            None => date.to_string(),
        })
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.default_format() {
            Some(format) => write!(f, "{}", self.value.format(&format)),
            None => Ok(()),
        }
    }
}

impl From<chrono::DateTime<FixedOffset>> for DateTime {
    fn from(value: chrono::DateTime<FixedOffset>) -> Self {
        Self::new(value)
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(value: chrono::DateTime<Utc>) -> Self {
        Self::new(value.fixed_offset())
    }
}

/// Checks that every directive in `format` is understood by chrono.
pub fn validate_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(DateTimeError::InvalidFormat(format.to_string()));
    }
    Ok(())
}

fn checked_format(format: &str) -> Result<Option<String>> {
    if format.is_empty() {
        return Ok(None);
    }
    validate_format(format)?;
    Ok(Some(format.to_string()))
}

fn parse_naive(input: &str, detected: DetectedFormat, today: NaiveDate) -> Result<NaiveDateTime> {
    let format = detected.format();
    let parsed = match detected.kind() {
        FormatKind::DateTime => NaiveDateTime::parse_from_str(input, format).ok(),
        FormatKind::Date => NaiveDate::parse_from_str(input, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0)),
        FormatKind::Time => NaiveTime::parse_from_str(input, format)
            .ok()
            .map(|time| today.and_time(time)),
    };
    parsed.ok_or_else(|| out_of_range(input, format))
}

fn out_of_range(input: &str, format: &str) -> DateTimeError {
    DateTimeError::OutOfRange {
        input: input.to_string(),
        format: format.to_string(),
    }
}
