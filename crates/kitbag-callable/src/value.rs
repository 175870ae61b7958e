//! Runtime values passed to and returned from callables.
//!
//! [`Value`] is the dynamic currency of the dispatcher: callables, their
//! arguments and their results are all values. Besides the usual scalars and
//! lists it can hold an instantiated [`Object`], a native closure
//! ([`Invocable`]) or a nested, not-yet-invoked [`CallableObject`].

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::callable::CallableObject;
use crate::error::Result;

type NativeFn = dyn Fn(Vec<Value>) -> Result<Value>;

/// A native function taking positional arguments.
///
/// Cloning is cheap; clones share the same closure.
///
/// # Example
///
/// ```
/// use kitbag_callable::{Invocable, Value};
///
/// let shout = Invocable::new(|args: Vec<Value>| {
///     Ok(Value::from(args[0].to_string().to_uppercase()))
/// });
/// assert_eq!(shout.invoke(vec!["hi".into()]).unwrap(), Value::from("HI"));
/// ```
#[derive(Clone)]
pub struct Invocable(Rc<NativeFn>);

impl Invocable {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value> + 'static,
    {
        Self(Rc::new(f))
    }

    /// Calls the closure with the given arguments.
    pub fn invoke(&self, args: Vec<Value>) -> Result<Value> {
        (self.0)(args)
    }

    /// Returns `true` if both handles share the same closure.
    pub fn ptr_eq(&self, other: &Invocable) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Invocable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invocable(..)")
    }
}

/// An instantiated object: opaque state tagged with its class name.
///
/// Objects are produced by a [`ClassDef`](crate::ClassDef) constructor and
/// handed to its methods, which recover the concrete state with
/// [`downcast_ref`](Object::downcast_ref). Clones share the same state.
///
/// # Example
///
/// ```
/// use kitbag_callable::Object;
///
/// struct Counter { start: i64 }
///
/// let obj = Object::new("Counter", Counter { start: 5 });
/// assert_eq!(obj.class(), "Counter");
/// assert_eq!(obj.downcast_ref::<Counter>().map(|c| c.start), Some(5));
/// assert!(obj.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct Object {
    class: Rc<str>,
    state: Rc<dyn Any>,
}

impl Object {
    /// Creates an object of class `class` holding `state`.
    pub fn new<T: Any>(class: impl Into<String>, state: T) -> Self {
        Self::from_rc(class, Rc::new(state))
    }

    pub(crate) fn from_rc(class: impl Into<String>, state: Rc<dyn Any>) -> Self {
        Self {
            class: Rc::from(class.into()),
            state,
        }
    }

    /// Returns the class name.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns the state if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.state.downcast_ref()
    }

    /// Returns `true` if the state is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.state.is::<T>()
    }

    /// Returns `true` if both handles share the same state.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("class", &&*self.class)
            .finish_non_exhaustive()
    }
}

/// Dynamic value handled by the dispatcher.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// String value. As a callable it is parsed as a function, class or
    /// `Class::method` / `Class->method` reference.
    Str(String),
    /// Ordered list.
    List(Vec<Value>),
    /// Instantiated object.
    Object(Object),
    /// Native closure.
    Callable(Invocable),
    /// Nested descriptor, invoked when used as a parameter.
    Deferred(Box<CallableObject>),
}

impl Value {
    /// Wraps a closure as a value.
    pub fn closure<F>(f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value> + 'static,
    {
        Value::Callable(Invocable::new(f))
    }

    /// Returns a short name for the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Object(_) => "object",
            Value::Callable(_) => "closure",
            Value::Deferred(_) => "callable",
        }
    }

    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is a `Str`.
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if this is an `Object`.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if this is a `Callable`.
    pub fn is_closure(&self) -> bool {
        matches!(self, Value::Callable(_))
    }

    /// Extracts the boolean, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the integer, if present.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Extracts a float, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Extracts the string, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the list, if present.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Extracts the object, if present.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Extracts the closure, if present.
    pub fn as_closure(&self) -> Option<&Invocable> {
        match self {
            Value::Callable(f) => Some(f),
            _ => None,
        }
    }

    /// Consumes the value, returning the owned string if it is one.
    pub fn into_string(self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Callable(a), Value::Callable(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(o) => write!(f, "<object {}>", o.class()),
            Value::Callable(_) => f.write_str("<closure>"),
            Value::Deferred(_) => f.write_str("<callable>"),
        }
    }
}

// Conversions from primitive types
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Invocable> for Value {
    fn from(f: Invocable) -> Self {
        Value::Callable(f)
    }
}

impl From<CallableObject> for Value {
    fn from(c: CallableObject) -> Self {
        Value::Deferred(Box::new(c))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(3).as_int(), Some(3));
        assert_eq!(Value::from(3).as_float(), Some(3.0));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert!(Value::Null.is_null());
        assert_eq!(Value::from("x").as_int(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }

    #[test]
    fn test_object_equality_is_identity() {
        let a = Object::new("A", 1u8);
        let b = Object::new("A", 1u8);
        assert_eq!(Value::from(a.clone()), Value::from(a.clone()));
        assert_ne!(Value::from(a), Value::from(b));
    }

    #[test]
    fn test_display() {
        let list = Value::List(vec![1.into(), "two".into(), Value::Float(1.5)]);
        assert_eq!(list.to_string(), "[1, two, 1.5]");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(Object::new("Foo", ())).to_string(), "<object Foo>");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::closure(|_| Ok(Value::Null)).type_name(), "closure");
        assert_eq!(Value::from(vec![]).type_name(), "list");
    }
}
