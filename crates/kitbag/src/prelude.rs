//! Common imports.
//!
//! ```rust
//! use kitbag::prelude::*;
//! ```

pub use crate::error_codes::{ErrorCodeError, ErrorCodes};
pub use kitbag_callable::{CallError, CallableKind, CallableObject, ClassDef, Registry, Value};
pub use kitbag_collection::{arr, Collection, Key};
pub use kitbag_datetime::{average, total, DateTime, DateTimeError, Interval};
pub use kitbag_file::{FileError, FileInfo};
pub use kitbag_num::NumberFormat;
pub use kitbag_str::{convert, slug, Case};
