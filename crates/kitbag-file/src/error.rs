use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by file operations.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file does not exist.
    #[error("the file '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// Reading the file failed.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for file operations.
pub type Result<T> = std::result::Result<T, FileError>;
