//! The callable descriptor.
//!
//! A [`CallableObject`] wraps a callable-like [`Value`] together with the
//! parameters to pass it. Preparing the descriptor classifies the value into
//! a [`CallableType`]; calling it resolves nested callables among the
//! parameters and then invokes the value the way its type requires.
//!
//! # Classification
//!
//! Rules are tried in order and the first match wins:
//!
//! | Value | Type |
//! |-------|------|
//! | closure | `CLOSURE` |
//! | object | `OBJECT` |
//! | string containing `::` | `STATIC_CALL` |
//! | string containing `->` | `INSTANCE_CALL` |
//! | string starting with `new ` | `NEW_OBJECT` |
//! | registered class name | `CONSTRUCTOR_CALL` |
//! | registered function name | `FUNCTION` |
//! | any other invocable value | `IS_CALLABLE` |
//!
//! Every type except `OBJECT` gets its `_PARAMS` variant when parameters are
//! present.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use kitbag_callable::{CallableObject, Registry, Value};
//!
//! let registry = Rc::new(Registry::new().function("trim", |args| {
//!     Ok(Value::from(args[0].to_string().trim().to_string()))
//! }));
//!
//! let mut callable = CallableObject::new(registry, "trim").with_parameter(" Hello World! ");
//! assert_eq!(callable.call().unwrap(), Value::from("Hello World!"));
//! assert!(callable.was_called());
//! assert_eq!(callable.callable_type().unwrap().as_str(), "FUNCTION_PARAMS");
//! ```

use std::rc::Rc;

use kitbag_collection::{Collection, Key};
use tracing::{debug, trace};

use crate::error::{CallError, Result};
use crate::kind::{CallableKind, CallableType};
use crate::registry::Registry;
use crate::value::Value;

/// A callable value, its parameters and its preparation state.
#[derive(Debug, Clone)]
pub struct CallableObject {
    registry: Rc<Registry>,
    callable: Value,
    callable_type: Option<CallableType>,
    parameters: Collection<Value>,
    constructor_params: Collection<Value>,
    class: Option<String>,
    method: Option<String>,
    was_called: bool,
}

impl CallableObject {
    /// Creates an unprepared descriptor resolved against `registry`.
    pub fn new(registry: Rc<Registry>, callable: impl Into<Value>) -> Self {
        Self {
            registry,
            callable: callable.into(),
            callable_type: None,
            parameters: Collection::new(),
            constructor_params: Collection::new(),
            class: None,
            method: None,
            was_called: false,
        }
    }

    /// Appends a positional parameter.
    pub fn with_parameter(mut self, value: impl Into<Value>) -> Self {
        self.parameters.push(value.into());
        self
    }

    /// Appends several positional parameters.
    pub fn with_parameters<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for value in values {
            self.parameters.push(value.into());
        }
        self
    }

    /// Appends several positional constructor parameters.
    pub fn with_constructor_params<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for value in values {
            self.constructor_params.push(value.into());
        }
        self
    }

    pub fn registry(&self) -> &Rc<Registry> {
        &self.registry
    }

    /// Replaces the callable value and returns the descriptor to the
    /// unprepared state.
    pub fn set_callable(&mut self, callable: impl Into<Value>) -> &mut Self {
        self.callable = callable.into();
        self.callable_type = None;
        self.class = None;
        self.method = None;
        self
    }

    pub fn callable(&self) -> &Value {
        &self.callable
    }

    /// The classification, or `None` while unprepared.
    pub fn callable_type(&self) -> Option<CallableType> {
        self.callable_type
    }

    /// Class name extracted during preparation.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Method name extracted during preparation.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    // Parameters

    /// Replaces all parameters.
    pub fn set_parameters(&mut self, parameters: Collection<Value>) -> &mut Self {
        self.parameters = parameters;
        self
    }

    /// Merges parameters: positional entries are appended, named entries
    /// inserted or overwritten.
    pub fn add_parameters(&mut self, parameters: Collection<Value>) -> &mut Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn add_parameter(&mut self, value: impl Into<Value>) -> &mut Self {
        self.parameters.push(value.into());
        self
    }

    pub fn add_named_parameter(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.parameters.insert(Key::Name(name.into()), value.into());
        self
    }

    pub fn parameters(&self) -> &Collection<Value> {
        &self.parameters
    }

    /// Looks up a parameter by position or name.
    pub fn parameter(&self, key: impl Into<Key>) -> Option<&Value> {
        self.parameters.get(key)
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    pub fn has_parameter(&self, key: impl Into<Key>) -> bool {
        self.parameters.has(key)
    }

    pub fn remove_parameter(&mut self, key: impl Into<Key>) -> &mut Self {
        self.parameters.remove(key);
        self
    }

    pub fn remove_parameters(&mut self) -> &mut Self {
        self.parameters.clear();
        self
    }

    // Constructor parameters

    pub fn set_constructor_params(&mut self, params: Collection<Value>) -> &mut Self {
        self.constructor_params = params;
        self
    }

    pub fn add_constructor_params(&mut self, params: Collection<Value>) -> &mut Self {
        self.constructor_params.extend(params);
        self
    }

    pub fn add_constructor_param(&mut self, value: impl Into<Value>) -> &mut Self {
        self.constructor_params.push(value.into());
        self
    }

    pub fn add_named_constructor_param(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.constructor_params.insert(Key::Name(name.into()), value.into());
        self
    }

    pub fn constructor_params(&self) -> &Collection<Value> {
        &self.constructor_params
    }

    pub fn constructor_param(&self, key: impl Into<Key>) -> Option<&Value> {
        self.constructor_params.get(key)
    }

    pub fn has_constructor_params(&self) -> bool {
        !self.constructor_params.is_empty()
    }

    pub fn has_constructor_param(&self, key: impl Into<Key>) -> bool {
        self.constructor_params.has(key)
    }

    pub fn remove_constructor_param(&mut self, key: impl Into<Key>) -> &mut Self {
        self.constructor_params.remove(key);
        self
    }

    pub fn remove_constructor_params(&mut self) -> &mut Self {
        self.constructor_params.clear();
        self
    }

    // State

    /// Prepares the descriptor if needed and reports whether it classified.
    ///
    /// Preparation errors propagate; once prepared this always returns
    /// `Ok(true)` without re-running classification.
    pub fn is_callable(&mut self) -> Result<bool> {
        if self.callable_type.is_none() {
            self.prepare()?;
        }
        Ok(self.callable_type.is_some())
    }

    pub fn was_called(&self) -> bool {
        self.was_called
    }

    /// Classifies the callable and validates any class or method it names.
    ///
    /// # Errors
    ///
    /// - [`CallError::UnknownClass`] if a named class is not registered
    /// - [`CallError::UnknownMethod`] if the class lacks the named method
    /// - [`CallError::NotInvocable`] if no rule matched
    ///
    /// On error the descriptor is left unprepared.
    pub fn prepare(&mut self) -> Result<&mut Self> {
        let (kind, class, method) = self.classify();

        if let Some(class) = &class {
            let def = self.registry.resolve_class(class)?;
            if let Some(method) = &method {
                let found = match kind {
                    Some(CallableKind::StaticCall) => def.has_static_method(method),
                    _ => def.has_method(method),
                };
                if !found {
                    return Err(CallError::UnknownMethod {
                        class: class.clone(),
                        method: method.clone(),
                    });
                }
            }
        }

        let kind = kind.ok_or(CallError::NotInvocable)?;
        let callable_type = CallableType::new(kind, self.has_parameters());
        debug!(
            callable_type = callable_type.as_str(),
            class = class.as_deref(),
            method = method.as_deref(),
            "prepared callable"
        );

        self.callable_type = Some(callable_type);
        self.class = class;
        self.method = method;
        Ok(self)
    }

    fn classify(&self) -> (Option<CallableKind>, Option<String>, Option<String>) {
        match &self.callable {
            Value::Callable(_) => (Some(CallableKind::Closure), None, None),
            Value::Object(_) => (Some(CallableKind::Object), None, None),
            Value::Str(s) => {
                if let Some((class, method)) = s.split_once("::") {
                    (Some(CallableKind::StaticCall), Some(class.to_string()), Some(method.to_string()))
                } else if let Some((class, method)) = s.split_once("->") {
                    (Some(CallableKind::InstanceCall), Some(class.to_string()), Some(method.to_string()))
                } else if let Some(class) = s.strip_prefix("new ") {
                    (Some(CallableKind::NewObject), Some(class.trim().to_string()), None)
                } else if self.registry.has_class(s) {
                    (Some(CallableKind::ConstructorCall), Some(s.clone()), None)
                } else if self.registry.has_function(s) {
                    (Some(CallableKind::Function), None, None)
                } else {
                    (None, None, None)
                }
            }
            other if self.registry.is_invocable(other) => (Some(CallableKind::IsCallable), None, None),
            _ => (None, None, None),
        }
    }

    /// Replaces every parameter that is itself callable with the result of
    /// calling it.
    ///
    /// Nested descriptors and invocable values are called with no arguments.
    /// A list whose first element is invocable, or names a registered
    /// function, is called with the remaining elements as arguments.
    pub fn prepare_parameters(&mut self) -> Result<&mut Self> {
        let registry = &self.registry;
        for (key, value) in self.parameters.iter_mut() {
            if let Some(resolved) = resolve_parameter(registry, value)? {
                trace!(%key, "resolved callable parameter");
                *value = resolved;
            }
        }
        Ok(self)
    }

    /// Prepares the descriptor if needed, resolves its parameters and
    /// invokes it.
    ///
    /// `was_called` is set once the invocation has been attempted, even if
    /// the invoked code fails. Preparation errors leave it untouched.
    pub fn call(&mut self) -> Result<Value> {
        if self.callable_type.is_none() {
            self.prepare()?;
        }
        self.sync_params_variant();
        self.prepare_parameters()?;

        let callable_type = self.callable_type.ok_or(CallError::NotInvocable)?;
        debug!(callable_type = callable_type.as_str(), "invoking callable");
        let result = self.invoke(callable_type);
        self.was_called = true;
        result
    }

    /// Appends positional parameters, then [`call`](Self::call)s.
    ///
    /// Named parameters can be merged beforehand with
    /// [`add_parameters`](Self::add_parameters).
    pub fn call_with<I, V>(&mut self, params: I) -> Result<Value>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for value in params {
            self.parameters.push(value.into());
        }
        self.call()
    }

    // The base kind is fixed at preparation; the `_PARAMS` flag follows the
    // parameter set present at dispatch time.
    fn sync_params_variant(&mut self) {
        if let Some(current) = self.callable_type {
            let updated = CallableType::new(current.kind(), self.has_parameters());
            if updated != current {
                trace!(from = current.as_str(), to = updated.as_str(), "parameter variant changed");
                self.callable_type = Some(updated);
            }
        }
    }

    fn invoke(&mut self, callable_type: CallableType) -> Result<Value> {
        let args = if callable_type.has_params() {
            self.parameters.to_vec()
        } else {
            Vec::new()
        };

        match callable_type.kind() {
            CallableKind::Function => {
                let name = self.callable.as_str().ok_or(CallError::NotInvocable)?;
                let function = self.registry.get_function(name).ok_or(CallError::NotInvocable)?;
                function.invoke(args)
            }
            CallableKind::Closure => match &self.callable {
                Value::Callable(f) => f.invoke(args),
                _ => Err(CallError::NotInvocable),
            },
            CallableKind::StaticCall => {
                let (class, method) = self.class_and_method()?;
                self.registry.resolve_class(class)?.call_static(method, args)
            }
            CallableKind::InstanceCall => {
                let (class, method) = self.class_and_method()?;
                let def = self.registry.resolve_class(class)?;
                let object = def.construct(self.constructor_params.to_vec())?;
                def.call_method(&object, method, args)
            }
            CallableKind::ConstructorCall | CallableKind::NewObject => {
                let class = self.class.as_deref().ok_or(CallError::NotInvocable)?;
                let object = self.registry.resolve_class(class)?.construct(args)?;
                Ok(Value::Object(object))
            }
            CallableKind::Object => Ok(self.callable.clone()),
            // A nested descriptor runs on a copy so its own parameters stay
            // as configured between calls.
            CallableKind::IsCallable => match &self.callable {
                Value::Deferred(inner) => (**inner).clone().call_with(args),
                other => self.registry.invoke_value(other, args),
            },
        }
    }

    fn class_and_method(&self) -> Result<(&str, &str)> {
        match (self.class.as_deref(), self.method.as_deref()) {
            (Some(class), Some(method)) => Ok((class, method)),
            _ => Err(CallError::NotInvocable),
        }
    }
}

fn resolve_parameter(registry: &Registry, value: &mut Value) -> Result<Option<Value>> {
    if let Value::Deferred(inner) = value {
        return inner.call().map(Some);
    }
    if registry.is_invocable(value) {
        return registry.invoke_value(value, Vec::new()).map(Some);
    }
    if let Value::List(items) = value {
        if let Some((head, rest)) = items.split_first() {
            if registry.is_invocable(head) {
                let args = rest.to_vec();
                return match head {
                    Value::Deferred(inner) => {
                        let mut inner = (**inner).clone();
                        inner.call_with(args).map(Some)
                    }
                    _ => registry.invoke_value(head, args).map(Some),
                };
            }
            if let Value::Str(name) = head {
                if let Some(function) = registry.get_function(name) {
                    return function.invoke(rest.to_vec()).map(Some);
                }
            }
        }
    }
    Ok(None)
}
