//! Classification tags for callables.

use std::fmt;

/// The invocation strategy selected for a callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallableKind {
    /// A registered function name.
    Function,
    /// A closure value.
    Closure,
    /// `"Class::method"`.
    StaticCall,
    /// `"Class->method"`, called on a freshly constructed instance.
    InstanceCall,
    /// A bare registered class name.
    ConstructorCall,
    /// `"new ClassName"`.
    NewObject,
    /// An already instantiated object, returned as is.
    Object,
    /// Any other value the registry can invoke.
    IsCallable,
}

impl CallableKind {
    /// All kinds, in classification order.
    pub const ALL: [CallableKind; 8] = [
        CallableKind::Closure,
        CallableKind::Object,
        CallableKind::StaticCall,
        CallableKind::InstanceCall,
        CallableKind::NewObject,
        CallableKind::ConstructorCall,
        CallableKind::Function,
        CallableKind::IsCallable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CallableKind::Function => "FUNCTION",
            CallableKind::Closure => "CLOSURE",
            CallableKind::StaticCall => "STATIC_CALL",
            CallableKind::InstanceCall => "INSTANCE_CALL",
            CallableKind::ConstructorCall => "CONSTRUCTOR_CALL",
            CallableKind::NewObject => "NEW_OBJECT",
            CallableKind::Object => "OBJECT",
            CallableKind::IsCallable => "IS_CALLABLE",
        }
    }

    /// Returns `false` for kinds that never take parameters.
    pub fn accepts_params(&self) -> bool {
        !matches!(self, CallableKind::Object)
    }
}

impl fmt::Display for CallableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [`CallableKind`] paired with whether parameters are passed.
///
/// Rendered as the kind's tag, with a `_PARAMS` suffix when parameters are
/// passed: `FUNCTION`, `FUNCTION_PARAMS`, `NEW_OBJECT_PARAMS` and so on.
/// `OBJECT` never carries the suffix.
///
/// ```
/// use kitbag_callable::{CallableKind, CallableType};
///
/// let ty = CallableType::new(CallableKind::StaticCall, true);
/// assert_eq!(ty.as_str(), "STATIC_CALL_PARAMS");
/// assert_eq!(CallableType::new(CallableKind::Object, true).as_str(), "OBJECT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallableType {
    kind: CallableKind,
    with_params: bool,
}

impl CallableType {
    pub fn new(kind: CallableKind, has_params: bool) -> Self {
        Self {
            kind,
            with_params: has_params && kind.accepts_params(),
        }
    }

    pub fn kind(&self) -> CallableKind {
        self.kind
    }

    /// Returns `true` for the `_PARAMS` variants.
    pub fn has_params(&self) -> bool {
        self.with_params
    }

    pub fn as_str(&self) -> &'static str {
        use CallableKind::*;
        match (self.kind, self.with_params) {
            (Function, false) => "FUNCTION",
            (Function, true) => "FUNCTION_PARAMS",
            (Closure, false) => "CLOSURE",
            (Closure, true) => "CLOSURE_PARAMS",
            (StaticCall, false) => "STATIC_CALL",
            (StaticCall, true) => "STATIC_CALL_PARAMS",
            (InstanceCall, false) => "INSTANCE_CALL",
            (InstanceCall, true) => "INSTANCE_CALL_PARAMS",
            (ConstructorCall, false) => "CONSTRUCTOR_CALL",
            (ConstructorCall, true) => "CONSTRUCTOR_CALL_PARAMS",
            (NewObject, false) => "NEW_OBJECT",
            (NewObject, true) => "NEW_OBJECT_PARAMS",
            (Object, _) => "OBJECT",
            (IsCallable, false) => "IS_CALLABLE",
            (IsCallable, true) => "IS_CALLABLE_PARAMS",
        }
    }
}

impl fmt::Display for CallableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CallableKind> for CallableType {
    fn from(kind: CallableKind) -> Self {
        CallableType::new(kind, false)
    }
}
