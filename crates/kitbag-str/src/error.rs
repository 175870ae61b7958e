use thiserror::Error;

/// Errors raised when parsing case names or conversion names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrError {
    /// The name does not match any known case.
    #[error("unknown case '{0}'")]
    UnknownCase(String),

    /// A conversion name is not of the form `<from>To<to>`.
    #[error("'{0}' is not a valid case conversion")]
    InvalidConversion(String),
}

/// Result type for string operations.
pub type Result<T> = std::result::Result<T, StrError>;
