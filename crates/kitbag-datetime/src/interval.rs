//! Clock-style durations: parsing, formatting, totals and averages.
//!
//! Format directives:
//!
//! | Directive | Meaning |
//! |-----------|---------|
//! | `%H` | hours, at least two digits |
//! | `%h` | hours |
//! | `%I` | minutes, at least two digits |
//! | `%i` | minutes |
//! | `%S` | seconds, at least two digits |
//! | `%s` | seconds |
//! | `%%` | a literal `%` |
//!
//! Unknown directives are copied through unchanged.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::{DateTimeError, Result};

/// Hours, minutes and seconds as given; components may exceed 59.
///
/// ```
/// use kitbag_datetime::Interval;
///
/// let interval: Interval = "05:09".parse().unwrap();
/// assert_eq!(interval, Interval::new(0, 5, 9));
/// assert_eq!(interval.format("%h:%I:%S"), "0:05:09");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Interval {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Interval {
    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Splits a number of seconds into hours, minutes and seconds.
    pub fn from_seconds(total: u64) -> Self {
        Self::new(total / 3600, total % 3600 / 60, total % 60)
    }

    /// Whole duration in seconds, saturating at `u64::MAX`.
    pub fn total_seconds(&self) -> u64 {
        self.checked_total_seconds().unwrap_or(u64::MAX)
    }

    /// Whole duration in seconds, or `None` if it does not fit in a `u64`.
    pub fn checked_total_seconds(&self) -> Option<u64> {
        self.hours
            .checked_mul(3600)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)
    }

    /// The same duration with minutes and seconds below 60.
    pub fn normalized(&self) -> Self {
        Self::from_seconds(self.total_seconds())
    }

    /// Parses `HH:MM:SS` or `MM:SS`.
    ///
    /// Components may exceed 59, but the whole duration must fit in a `u64`
    /// number of seconds.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || DateTimeError::InvalidInterval(input.to_string());
        let parts = input
            .trim()
            .split(':')
            .map(|part| part.trim().parse::<u64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>>>()?;
        let interval = match parts.as_slice() {
            [hours, minutes, seconds] => Self::new(*hours, *minutes, *seconds),
            [minutes, seconds] => Self::new(0, *minutes, *seconds),
            _ => return Err(invalid()),
        };
        interval.checked_total_seconds().ok_or_else(invalid)?;
        Ok(interval)
    }

    /// Renders with the directives listed in the module docs.
    pub fn format(&self, format: &str) -> String {
        let mut out = String::with_capacity(format.len() + 8);
        let mut chars = format.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('H') => out.push_str(&format!("{:02}", self.hours)),
                Some('h') => out.push_str(&self.hours.to_string()),
                Some('I') => out.push_str(&format!("{:02}", self.minutes)),
                Some('i') => out.push_str(&self.minutes.to_string()),
                Some('S') => out.push_str(&format!("{:02}", self.seconds)),
                Some('s') => out.push_str(&self.seconds.to_string()),
                Some('%') => out.push('%'),
                Some(other) => {
                    out.push('%');
                    out.push(other);
                }
                None => out.push('%'),
            }
        }
        out
    }
}

impl FromStr for Interval {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("%H:%I:%S"))
    }
}

/// Sums each component separately, without carrying.
///
/// Sums saturate at `u64::MAX`. With `seconds_only` everything is folded into the seconds field.
///
/// ```
/// use kitbag_datetime::{total, Interval};
///
/// let times = [Interval::new(1, 50, 40), Interval::new(0, 20, 30)];
/// assert_eq!(total(&times, false).to_string(), "01:70:70");
/// assert_eq!(total(&times, true).seconds, 7870);
/// ```
pub fn total<I>(times: I, seconds_only: bool) -> Interval
where
    I: IntoIterator,
    I::Item: Borrow<Interval>,
{
    let sum = times.into_iter().fold(Interval::default(), |acc, time| {
        let time = time.borrow();
        Interval::new(
            acc.hours.saturating_add(time.hours),
            acc.minutes.saturating_add(time.minutes),
            acc.seconds.saturating_add(time.seconds),
        )
    });
    if seconds_only {
        Interval::new(0, 0, sum.total_seconds())
    } else {
        sum
    }
}

/// The mean duration, truncated to whole seconds.
///
/// The running sum is kept in 128 bits, so large inputs cannot overflow it.
/// Normalised unless `seconds_only` is set, in which case the whole mean is
/// in the seconds field. `None` for an empty input.
pub fn average<I>(times: I, seconds_only: bool) -> Option<Interval>
where
    I: IntoIterator,
    I::Item: Borrow<Interval>,
{
    let (sum, count) = times.into_iter().fold((0u128, 0u128), |(sum, count), time| {
        (sum + u128::from(time.borrow().total_seconds()), count + 1)
    });
    if count == 0 {
        return None;
    }
    let mean = u64::try_from(sum / count).unwrap_or(u64::MAX);
    Some(if seconds_only {
        Interval::new(0, 0, mean)
    } else {
        Interval::from_seconds(mean)
    })
}
