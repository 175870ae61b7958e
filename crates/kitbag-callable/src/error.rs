//! Error types for the callable crate.

use thiserror::Error;

/// Errors raised while preparing or invoking a callable.
///
/// The first three variants are configuration errors detected during
/// preparation. The remaining ones come from the invoked code itself and are
/// passed through unchanged.
#[derive(Debug, Error)]
pub enum CallError {
    /// A class named by the descriptor is not registered.
    #[error("the class '{class}' does not exist")]
    UnknownClass { class: String },

    /// The class exists but does not define the method.
    #[error("the method '{method}' does not exist in the class '{class}'")]
    UnknownMethod { class: String, method: String },

    /// No classification rule matched the value.
    #[error("unable to prepare the callable object for execution")]
    NotInvocable,

    /// An invoked function rejected its arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Any other failure raised by invoked code.
    #[error(transparent)]
    Native(#[from] anyhow::Error),
}

impl CallError {
    /// Builds an [`InvalidArgument`](CallError::InvalidArgument) error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CallError::InvalidArgument(message.into())
    }

    /// Returns `true` for errors detected while preparing a descriptor.
    pub fn is_preparation_error(&self) -> bool {
        matches!(
            self,
            CallError::UnknownClass { .. } | CallError::UnknownMethod { .. } | CallError::NotInvocable
        )
    }
}

/// Result type for callable operations.
pub type Result<T> = std::result::Result<T, CallError>;
