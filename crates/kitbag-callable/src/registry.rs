//! Named functions and classes known to the dispatcher.
//!
//! A [`Registry`] is the table a [`CallableObject`](crate::CallableObject)
//! consults when it classifies a string: `"trim"` resolves to a registered
//! function, `"Greeter"` to a registered class, `"Greeter::hello"` to one of
//! its static methods.
//!
//! # Registering
//!
//! ```rust
//! use kitbag_callable::{ClassDef, Registry, Value};
//!
//! struct Greeter { name: String }
//!
//! let registry = Registry::new()
//!     .function("trim", |args| {
//!         Ok(Value::from(args[0].to_string().trim().to_string()))
//!     })
//!     .class(
//!         ClassDef::new("Greeter", |args| {
//!             Ok(Greeter { name: args.first().map(|v| v.to_string()).unwrap_or_default() })
//!         })
//!         .method("greet", |this: &Greeter, _args| Ok(Value::from(format!("Hi {}", this.name))))
//!         .static_method("hello", |_args| Ok(Value::from("hello"))),
//!     );
//!
//! assert!(registry.has_function("trim"));
//! assert!(registry.get_class("Greeter").unwrap().has_instance_method("greet"));
//! ```
//!
//! # Invocable values
//!
//! Besides strings, [`Registry::is_invocable`] accepts closures, nested
//! descriptors and two-element lists naming a bound method
//! (`[object, "method"]`) or a static method (`["Class", "method"]`).

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::error::{CallError, Result};
use crate::value::{Invocable, Object, Value};

type ConstructorFn = dyn Fn(Vec<Value>) -> Result<Rc<dyn Any>>;
type MethodFn = dyn Fn(&Object, Vec<Value>) -> Result<Value>;

/// A class: a constructor plus instance and static methods.
///
/// The constructor receives positional arguments and returns the object's
/// state. Instance methods receive that state back, already downcast.
#[derive(Clone)]
pub struct ClassDef {
    name: String,
    constructor: Rc<ConstructorFn>,
    methods: HashMap<String, Rc<MethodFn>>,
    static_methods: HashMap<String, Invocable>,
}

impl ClassDef {
    /// Creates a class whose instances hold the `T` built by `constructor`.
    pub fn new<T, F>(name: impl Into<String>, constructor: F) -> Self
    where
        T: Any,
        F: Fn(Vec<Value>) -> Result<T> + 'static,
    {
        Self {
            name: name.into(),
            constructor: Rc::new(move |args| constructor(args).map(|state| Rc::new(state) as Rc<dyn Any>)),
            methods: HashMap::new(),
            static_methods: HashMap::new(),
        }
    }

    /// Adds an instance method operating on the state type `T`.
    ///
    /// Calling it on an object holding a different type fails with
    /// [`CallError::InvalidArgument`].
    pub fn method<T, F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        T: Any,
        F: Fn(&T, Vec<Value>) -> Result<Value> + 'static,
    {
        let name = name.into();
        let class = self.name.clone();
        let method = name.clone();
        let wrapped = move |object: &Object, args: Vec<Value>| match object.downcast_ref::<T>() {
            Some(state) => f(state, args),
            None => Err(CallError::invalid_argument(format!(
                "object of class '{}' cannot be used as '{}' in {}::{}",
                object.class(),
                class,
                class,
                method
            ))),
        };
        self.methods.insert(name, Rc::new(wrapped));
        self
    }

    /// Adds a static method.
    pub fn static_method<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value> + 'static,
    {
        self.static_methods.insert(name.into(), Invocable::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if an instance or static method has this name.
    pub fn has_method(&self, name: &str) -> bool {
        self.has_instance_method(name) || self.has_static_method(name)
    }

    pub fn has_instance_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn has_static_method(&self, name: &str) -> bool {
        self.static_methods.contains_key(name)
    }

    /// Builds a new instance.
    pub fn construct(&self, args: Vec<Value>) -> Result<Object> {
        let state = (self.constructor)(args)?;
        Ok(Object::from_rc(self.name.clone(), state))
    }

    /// Calls `method` on `object`, falling back to a static method of the
    /// same name.
    pub fn call_method(&self, object: &Object, method: &str, args: Vec<Value>) -> Result<Value> {
        if let Some(f) = self.methods.get(method) {
            return f(object, args);
        }
        self.call_static(method, args)
    }

    /// Calls a static method.
    pub fn call_static(&self, method: &str, args: Vec<Value>) -> Result<Value> {
        match self.static_methods.get(method) {
            Some(f) => f.invoke(args),
            None => Err(self.unknown_method(method)),
        }
    }

    fn unknown_method(&self, method: &str) -> CallError {
        CallError::UnknownMethod {
            class: self.name.clone(),
            method: method.to_string(),
        }
    }
}

impl fmt::Debug for ClassDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        let mut statics: Vec<&str> = self.static_methods.keys().map(String::as_str).collect();
        methods.sort_unstable();
        statics.sort_unstable();
        f.debug_struct("ClassDef")
            .field("name", &self.name)
            .field("methods", &methods)
            .field("static_methods", &statics)
            .finish()
    }
}

/// Registry of named functions and classes.
#[derive(Clone, Default)]
pub struct Registry {
    functions: HashMap<String, Invocable>,
    classes: HashMap<String, ClassDef>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named function (builder form).
    pub fn function<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value> + 'static,
    {
        self.register_function(name, f);
        self
    }

    /// Adds a class (builder form).
    pub fn class(mut self, class: ClassDef) -> Self {
        self.register_class(class);
        self
    }

    /// Adds a named function, replacing any previous one.
    pub fn register_function<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(Vec<Value>) -> Result<Value> + 'static,
    {
        self.functions.insert(name.into(), Invocable::new(f));
        self
    }

    /// Adds a class, replacing any previous class of the same name.
    pub fn register_class(&mut self, class: ClassDef) -> &mut Self {
        self.classes.insert(class.name.clone(), class);
        self
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn get_function(&self, name: &str) -> Option<&Invocable> {
        self.functions.get(name)
    }

    pub fn get_class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.get(name)
    }

    /// Looks up a class, failing with [`CallError::UnknownClass`].
    pub fn resolve_class(&self, name: &str) -> Result<&ClassDef> {
        self.classes.get(name).ok_or_else(|| CallError::UnknownClass {
            class: name.to_string(),
        })
    }

    /// Registered function names, sorted.
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered class names, sorted.
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns `true` if `value` can be invoked without further
    /// classification.
    ///
    /// Plain strings are not accepted here: a string parameter is data, not a
    /// function reference.
    pub fn is_invocable(&self, value: &Value) -> bool {
        match value {
            Value::Callable(_) | Value::Deferred(_) => true,
            Value::List(items) => self.bound_method(items).is_some(),
            _ => false,
        }
    }

    /// Invokes a closure or a method pair with positional arguments.
    ///
    /// Nested descriptors need exclusive access and are invoked through
    /// [`CallableObject::call_with`](crate::CallableObject::call_with)
    /// instead; passing one here fails with [`CallError::NotInvocable`].
    pub fn invoke_value(&self, value: &Value, args: Vec<Value>) -> Result<Value> {
        match value {
            Value::Callable(f) => f.invoke(args),
            Value::List(items) => match self.bound_method(items) {
                Some(BoundMethod::Instance(object, method)) => {
                    debug!(class = object.class(), method, "invoking bound method");
                    self.resolve_class(object.class())?.call_method(object, method, args)
                }
                Some(BoundMethod::Static(class, method)) => {
                    debug!(class, method, "invoking static method pair");
                    self.resolve_class(class)?.call_static(method, args)
                }
                None => Err(CallError::NotInvocable),
            },
            _ => Err(CallError::NotInvocable),
        }
    }

    fn bound_method<'a>(&self, items: &'a [Value]) -> Option<BoundMethod<'a>> {
        match items {
            [Value::Object(object), Value::Str(method)] => {
                let class = self.classes.get(object.class())?;
                class.has_method(method).then_some(BoundMethod::Instance(object, method))
            }
            [Value::Str(class), Value::Str(method)] => {
                let def = self.classes.get(class.as_str())?;
                def.has_static_method(method).then_some(BoundMethod::Static(class, method))
            }
            _ => None,
        }
    }
}

enum BoundMethod<'a> {
    Instance(&'a Object, &'a str),
    Static(&'a str, &'a str),
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("functions", &self.function_names())
            .field("classes", &self.class_names())
            .finish()
    }
}
