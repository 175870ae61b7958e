//! The seven dates of a week.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{DateTimeError, Result};

/// The Sunday-to-Saturday week containing `date`.
///
/// `None` only at the edges of chrono's date range.
///
/// ```
/// use chrono::NaiveDate;
/// use kitbag_datetime::week_dates;
///
/// let thursday = NaiveDate::from_ymd_opt(2021, 12, 16).unwrap();
/// let week = week_dates(thursday).unwrap();
/// assert_eq!(week[0], NaiveDate::from_ymd_opt(2021, 12, 12).unwrap());
/// assert_eq!(week[6], NaiveDate::from_ymd_opt(2021, 12, 18).unwrap());
/// ```
pub fn week_dates(date: NaiveDate) -> Option<[NaiveDate; 7]> {
    let back = u64::from(date.weekday().num_days_from_sunday());
    let sunday = date.checked_sub_days(Days::new(back))?;
    seven_days_from(sunday)
}

/// The Monday-to-Sunday dates of ISO week `week` in `year`.
///
/// # Errors
///
/// [`DateTimeError::InvalidWeek`] when the year has no such week.
pub fn iso_week_dates(year: i32, week: u32) -> Result<[NaiveDate; 7]> {
    let invalid = || DateTimeError::InvalidWeek { year, week };
    let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(invalid)?;
    seven_days_from(monday).ok_or_else(invalid)
}

fn seven_days_from(start: NaiveDate) -> Option<[NaiveDate; 7]> {
    let mut days = [start; 7];
    for (offset, day) in (0u64..).zip(days.iter_mut()).skip(1) {
        *day = start.checked_add_days(Days::new(offset))?;
    }
    Some(days)
}
