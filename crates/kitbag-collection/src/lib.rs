//! Ordered, keyed collections.
//!
//! `kitbag-collection` provides [`Collection`], an insertion-ordered container
//! whose entries are addressed either by an automatically assigned position or
//! by a name, plus the [`arr`] module of free-standing helpers.
//!
//! Mixed positional and named entries make it a natural fit for argument
//! lists: the callable dispatcher stores its parameters in a
//! `Collection<Value>`.
//!
//! # Quick Start
//!
//! ```rust
//! use kitbag_collection::{Collection, Key};
//!
//! let mut params = Collection::new();
//! params.push(123);
//! params.push(456);
//! params.insert("foo", 789);
//!
//! assert_eq!(params.len(), 3);
//! assert!(params.has("foo"));
//! assert!(!params.is_list());
//!
//! params.remove("foo");
//! assert!(params.is_list());
//! assert_eq!(params.to_json().unwrap(), "[123,456]");
//! ```
//!
//! # Modules
//!
//! - [`Collection`] and [`Key`]: the container itself
//! - [`arr`]: join/split, slicing, flattening, prepend/pull helpers

pub mod arr;
mod collection;
mod json;
mod key;

pub use collection::Collection;
pub use key::Key;
