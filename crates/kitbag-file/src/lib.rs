//! File metadata helpers.
//!
//! [`FileInfo`] splits a path into its parts (basename, name, extension,
//! directory), records the size of existing files and maps the extension to
//! a mime type. [`format_size`] renders byte counts for people.
//!
//! ```rust
//! use kitbag_file::{format_size, mime_types, FileInfo};
//!
//! let info = FileInfo::new("photos/cat.jpg");
//! assert_eq!(info.mime_type(), Some("image/jpeg"));
//! assert_eq!(mime_types().get("png"), Some(&"image/png"));
//! assert_eq!(format_size(2048, 1), "2 KB");
//! ```

mod error;
mod info;
mod mime;
mod size;

pub use error::{FileError, Result};
pub use info::{file_mime_type, FileInfo};
pub use mime::{mime_type_for, mime_types, DEFAULT_MIME_TYPE};
pub use size::format_size;
