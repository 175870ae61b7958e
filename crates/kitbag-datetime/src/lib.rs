//! Date and time helpers on top of chrono.
//!
//! - [`DateTime`] parses common layouts (see [`detect_format`]) and carries
//!   default date and time formats used by `Display`.
//! - [`Interval`] holds clock durations such as `"02:13:58"`; [`total`] and
//!   [`average`] aggregate them.
//! - [`week_dates`] and [`iso_week_dates`] list the days of a week.
//!
//! ```rust
//! use kitbag_datetime::{average, total, Interval};
//!
//! let times: Vec<Interval> = ["00:13:58", "00:05:09"]
//!     .iter()
//!     .map(|t| t.parse().unwrap())
//!     .collect();
//!
//! assert_eq!(total(&times, false).to_string(), "00:18:67");
//! assert_eq!(average(&times, false).unwrap().to_string(), "00:09:33");
//! ```

mod datetime;
mod detect;
mod error;
mod interval;
mod week;

pub use datetime::{validate_format, DateTime};
pub use detect::{detect_format, DetectedFormat, FormatKind};
pub use error::{DateTimeError, Result};
pub use interval::{average, total, Interval};
pub use week::{iso_week_dates, week_dates};
