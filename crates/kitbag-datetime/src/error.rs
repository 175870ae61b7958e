use thiserror::Error;

/// Errors raised by date/time helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateTimeError {
    /// The input matched no known date/time layout.
    #[error("unrecognized date/time '{0}'")]
    Unrecognized(String),

    /// The input matched a layout but is not a real date or time.
    #[error("invalid date/time '{input}' for format '{format}'")]
    OutOfRange { input: String, format: String },

    /// A strftime format string contains an invalid directive.
    #[error("invalid format string '{0}'")]
    InvalidFormat(String),

    /// An interval is not of the form `HH:MM:SS` or `MM:SS`.
    #[error("invalid interval '{0}'")]
    InvalidInterval(String),

    /// No such ISO week.
    #[error("week {week} does not exist in {year}")]
    InvalidWeek { year: i32, week: u32 },
}

/// Result type for date/time operations.
pub type Result<T> = std::result::Result<T, DateTimeError>;
