//! Classify and invoke callable descriptors.
//!
//! `kitbag-callable` turns loosely specified "things that can be called" into
//! invocations: a registered function name, a `"Class::method"` string, a
//! closure, a class to instantiate or an already built object. A
//! [`CallableObject`] holds one of these plus its parameters, works out which
//! of them it is ([`CallableType`]) and calls it.
//!
//! Names are resolved against an explicit [`Registry`] of functions and
//! classes ([`ClassDef`]) rather than by runtime reflection.
//!
//! # Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use kitbag_callable::{CallableObject, ClassDef, Registry, Value};
//!
//! struct Greeter;
//!
//! let registry = Rc::new(
//!     Registry::new().class(
//!         ClassDef::new("Greeter", |_| Ok(Greeter))
//!             .static_method("hello", |args| Ok(Value::from(format!("Hello, {}", args[0])))),
//!     ),
//! );
//!
//! let mut hello = CallableObject::new(registry.clone(), "Greeter::hello").with_parameter("Nick");
//! assert_eq!(hello.call().unwrap(), Value::from("Hello, Nick"));
//!
//! let mut greeter = CallableObject::new(registry, "new Greeter");
//! assert!(greeter.call().unwrap().is_object());
//! ```
//!
//! # Parameters
//!
//! Parameters are stored in a [`Collection`](kitbag_collection::Collection),
//! so they may be positional or named; named keys are dropped when the
//! values are passed. Before every call, parameters that are themselves
//! callable (nested descriptors, closures, method pairs) are replaced by the
//! result of calling them.
//!
//! # Logging
//!
//! Preparation and invocation emit `tracing` events at `debug` level;
//! parameter resolution at `trace` level.

mod callable;
mod error;
mod kind;
mod registry;
mod value;

pub use callable::CallableObject;
pub use error::{CallError, Result};
pub use kind::{CallableKind, CallableType};
pub use registry::{ClassDef, Registry};
pub use value::{Invocable, Object, Value};
