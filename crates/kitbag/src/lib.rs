//! A grab bag of small utilities built around a callable dispatcher.
//!
//! This crate gathers the `kitbag-*` crates behind one dependency:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`callable`] | [`CallableObject`] descriptors, the [`Registry`] they resolve against, [`Value`] |
//! | [`collection`] | ordered keyed [`Collection`]s and array helpers |
//! | [`string`] | case conversion, slugs, links, random strings |
//! | [`num`] | number, currency and percentage formatting |
//! | [`file`] | [`FileInfo`] and mime types |
//! | [`datetime`] | [`DateTime`] defaults, [`Interval`] totals and averages, week dates |
//! | [`functions`] | the helpers above registered as named functions |
//!
//! Most programs only need the [`prelude`].
//!
//! ```rust
//! use std::rc::Rc;
//! use kitbag::prelude::*;
//!
//! let registry = Rc::new(kitbag::functions::registry());
//! let mut callable = CallableObject::new(registry, "str_snake_case")
//!     .with_parameter("someCamelCase");
//!
//! assert_eq!(callable.call().unwrap(), Value::from("some_camel_case"));
//! assert!(callable.was_called());
//! ```

mod error_codes;
pub mod functions;
pub mod prelude;

pub use kitbag_callable as callable;
pub use kitbag_collection as collection;
pub use kitbag_datetime as datetime;
pub use kitbag_file as file;
pub use kitbag_num as num;
pub use kitbag_str as string;

pub use error_codes::{ErrorCodeError, ErrorCodes};
pub use kitbag_callable::{CallError, CallableKind, CallableObject, CallableType, ClassDef, Registry, Value};
pub use kitbag_collection::{Collection, Key};
pub use kitbag_datetime::{DateTime, Interval};
pub use kitbag_file::FileInfo;
