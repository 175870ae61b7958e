//! Integration tests for callable classification and dispatch.

use std::cell::Cell;
use std::rc::Rc;

use kitbag_callable::{CallError, CallableKind, CallableObject, ClassDef, Registry, Value};
use kitbag_collection::Collection;
use proptest::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

struct TestClass {
    foo: Option<String>,
}

fn test_class() -> ClassDef {
    ClassDef::new("TestClass", |args: Vec<Value>| {
        Ok(TestClass {
            foo: args.into_iter().next().and_then(Value::into_string),
        })
    })
    .method("print_foo", |this: &TestClass, _| Ok(Value::from(this.foo.clone())))
    .static_method("say_hello", |args| {
        let name = args.first().map(Value::to_string).unwrap_or_default();
        Ok(Value::from(format!("Hello, {}", name)))
    })
}

fn registry() -> Rc<Registry> {
    Rc::new(
        Registry::new()
            .function("trim", |args| match args.first() {
                Some(Value::Str(s)) => Ok(Value::from(s.trim())),
                Some(other) => Err(CallError::invalid_argument(format!(
                    "trim expects a string, got {}",
                    other.type_name()
                ))),
                None => Err(CallError::invalid_argument("trim expects one argument")),
            })
            .function("greeting", |_| Ok(Value::from("  hi  ")))
            .class(test_class()),
    )
}

fn foo_of(value: &Value) -> Option<String> {
    value
        .as_object()
        .and_then(|o| o.downcast_ref::<TestClass>())
        .and_then(|t| t.foo.clone())
}

// ============================================================================
// Construction & parameters
// ============================================================================

#[test]
fn test_constructor() {
    let callable = CallableObject::new(registry(), "trim").with_parameter(" Hello World! ");
    assert_eq!(callable.callable(), &Value::from("trim"));
    assert_eq!(callable.parameter(0), Some(&Value::from(" Hello World! ")));
    assert!(callable.callable_type().is_none());
    assert!(!callable.was_called());
}

#[test]
fn test_parameters() {
    let mut callable = CallableObject::new(registry(), "trim").with_parameters([123, 456]);
    assert!(callable.has_parameters());
    assert_eq!(callable.parameters().len(), 2);

    callable.add_named_parameter("foo", "bar");
    assert!(callable.has_parameter("foo"));
    assert_eq!(callable.parameters().len(), 3);
    assert_eq!(callable.parameter(0), Some(&Value::Int(123)));
    assert_eq!(callable.parameter(1), Some(&Value::Int(456)));
    assert_eq!(callable.parameter("foo"), Some(&Value::from("bar")));

    callable.remove_parameter("foo");
    assert!(!callable.has_parameter("foo"));
    assert_eq!(callable.parameters().len(), 2);

    callable.remove_parameters();
    assert!(!callable.has_parameters());

    let mut more = Collection::new();
    more.push(Value::Int(789));
    more.insert("test", Value::Int(987));
    callable.add_parameters(more);
    assert!(callable.has_parameters());
    assert_eq!(callable.parameters().len(), 2);
}

#[test]
fn test_constructor_params() {
    let mut callable = CallableObject::new(registry(), "Foo");
    callable.set_constructor_params(Collection::from_values(vec![Value::Int(123), Value::Int(456)]));
    assert!(callable.has_constructor_params());
    assert_eq!(callable.constructor_params().len(), 2);
    assert_eq!(callable.constructor_param(0), Some(&Value::Int(123)));
    assert_eq!(callable.constructor_param(1), Some(&Value::Int(456)));

    callable.remove_constructor_param(1);
    assert!(!callable.has_constructor_param(1));
    assert_eq!(callable.constructor_params().len(), 1);

    callable.remove_constructor_params();
    assert!(!callable.has_constructor_params());
}

#[test]
fn test_mutators_chain() {
    let mut callable = CallableObject::new(registry(), "trim");
    callable.add_parameter(" a ").add_named_parameter("x", 1).remove_parameter("x");
    assert_eq!(callable.parameters().len(), 1);
}

// ============================================================================
// Dispatch by type
// ============================================================================

#[test]
fn test_function_call() {
    let mut callable = CallableObject::new(registry(), "trim").with_parameter(" Hello World! ");
    assert_eq!(callable.call().unwrap(), Value::from("Hello World!"));
    assert!(callable.was_called());
}

#[test]
fn test_function_call_without_params() {
    let mut callable = CallableObject::new(registry(), "greeting");
    assert!(callable.is_callable().unwrap());
    assert_eq!(callable.callable_type().unwrap().as_str(), "FUNCTION");
    assert_eq!(callable.call().unwrap(), Value::from("  hi  "));
}

#[test]
fn test_closure_call() {
    let closure = Value::closure(|args| {
        Ok(Value::from(format!("This is another way to say hello, {}!", args[0])))
    });
    let mut callable = CallableObject::new(registry(), closure).with_parameter("Nick");
    assert_eq!(
        callable.call().unwrap(),
        Value::from("This is another way to say hello, Nick!")
    );
    assert_eq!(callable.callable_type().unwrap().as_str(), "CLOSURE_PARAMS");
}

#[test]
fn test_static_call() {
    let mut callable = CallableObject::new(registry(), "TestClass::say_hello").with_parameter("Nick");
    assert!(callable.is_callable().unwrap());
    assert_eq!(callable.call().unwrap(), Value::from("Hello, Nick"));
    assert_eq!(callable.class(), Some("TestClass"));
    assert_eq!(callable.method(), Some("say_hello"));
}

#[test]
fn test_instance_call() {
    let mut callable = CallableObject::new(registry(), "TestClass->print_foo");
    let mut ctor = Collection::new();
    ctor.insert("foo", Value::from("HI!"));
    callable.set_constructor_params(ctor);
    assert_eq!(callable.call().unwrap(), Value::from("HI!"));
    assert_eq!(callable.callable_type().unwrap().as_str(), "INSTANCE_CALL");
}

#[test]
fn test_instance_call_default_construction() {
    let mut callable = CallableObject::new(registry(), "TestClass->print_foo");
    assert_eq!(callable.call().unwrap(), Value::Null);
}

#[test]
fn test_instance_call_reaches_static_method() {
    let mut callable = CallableObject::new(registry(), "TestClass->say_hello").with_parameter("Ann");
    assert_eq!(callable.call().unwrap(), Value::from("Hello, Ann"));
}

#[test]
fn test_constructor_call() {
    let mut callable = CallableObject::new(registry(), "TestClass").with_parameter("HI BACK!");
    let result = callable.call().unwrap();
    assert_eq!(result.as_object().map(|o| o.class()), Some("TestClass"));
    assert_eq!(foo_of(&result), Some("HI BACK!".to_string()));
    assert_eq!(callable.callable_type().unwrap().as_str(), "CONSTRUCTOR_CALL_PARAMS");
}

#[test]
fn test_new_object() {
    let mut plain = CallableObject::new(registry(), "new TestClass");
    let result = plain.call().unwrap();
    assert!(result.is_object());
    assert_eq!(foo_of(&result), None);

    let mut with_params = CallableObject::new(registry(), "new TestClass").with_parameter("built");
    let result = with_params.call().unwrap();
    assert_eq!(with_params.callable_type().unwrap().as_str(), "NEW_OBJECT_PARAMS");
    assert_eq!(foo_of(&result), Some("built".to_string()));
}

#[test]
fn test_object_returned_unchanged() {
    let object = test_class().construct(vec![Value::from("same")]).unwrap();
    let mut callable = CallableObject::new(registry(), object.clone()).with_parameter("ignored");
    let result = callable.call().unwrap();
    assert_eq!(result, Value::Object(object));
    assert_eq!(callable.callable_type().unwrap().as_str(), "OBJECT");
}

#[test]
fn test_is_callable_bound_method_pair() {
    let registry = registry();
    let object = test_class().construct(vec![Value::from("pair")]).unwrap();
    let pair = Value::List(vec![object.into(), Value::from("print_foo")]);
    let mut callable = CallableObject::new(registry, pair);
    assert_eq!(callable.call().unwrap(), Value::from("pair"));
    assert_eq!(callable.callable_type().unwrap().kind(), CallableKind::IsCallable);
}

#[test]
fn test_is_callable_nested_descriptor() {
    let registry = registry();
    let inner = CallableObject::new(registry.clone(), "trim");
    let mut outer = CallableObject::new(registry, inner).with_parameter("  nested  ");
    assert_eq!(outer.call().unwrap(), Value::from("nested"));
    assert_eq!(outer.callable_type().unwrap().as_str(), "IS_CALLABLE_PARAMS");
}

#[test]
fn test_nested_descriptor_callable_keeps_its_parameters() {
    let registry = registry();
    let inner = CallableObject::new(
        registry.clone(),
        Value::closure(|args| Ok(Value::from(args.len() as i64))),
    );
    let mut outer = CallableObject::new(registry, inner).with_parameter("x");
    assert_eq!(outer.call().unwrap(), Value::from(1));
    assert_eq!(outer.call().unwrap(), Value::from(1));
    assert_eq!(outer.call().unwrap(), Value::from(1));
    assert_eq!(outer.callable_type().unwrap().as_str(), "IS_CALLABLE_PARAMS");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_prepare_no_class() {
    let mut callable = CallableObject::new(registry(), "BadClass->bad_method");
    let err = callable.call().unwrap_err();
    assert!(matches!(err, CallError::UnknownClass { ref class } if class == "BadClass"));
    assert_eq!(err.to_string(), "the class 'BadClass' does not exist");
}

#[test]
fn test_prepare_no_method() {
    let mut callable = CallableObject::new(registry(), "TestClass->bad_method");
    let err = callable.call().unwrap_err();
    assert!(matches!(err, CallError::UnknownMethod { .. }));
    assert!(err.is_preparation_error());
}

#[test]
fn test_static_call_requires_static_method() {
    let mut callable = CallableObject::new(registry(), "TestClass::print_foo");
    assert!(matches!(callable.prepare(), Err(CallError::UnknownMethod { .. })));
}

#[test]
fn test_prepare_not_invocable() {
    let mut callable = CallableObject::new(registry(), "bad_function");
    let err = callable.call().unwrap_err();
    assert!(matches!(err, CallError::NotInvocable));
    assert_eq!(err.to_string(), "unable to prepare the callable object for execution");
    assert!(!callable.was_called());
}

#[test]
fn test_non_string_scalar_not_invocable() {
    let mut callable = CallableObject::new(registry(), 42);
    assert!(matches!(callable.is_callable(), Err(CallError::NotInvocable)));
}

#[test]
fn test_invocation_errors_propagate() {
    let mut callable = CallableObject::new(registry(), "trim").with_parameter(5);
    let err = callable.call().unwrap_err();
    assert!(matches!(err, CallError::InvalidArgument(_)));
    assert!(!err.is_preparation_error());
    assert!(callable.was_called());
}

#[test]
fn test_native_errors_pass_through() {
    let registry = Rc::new(Registry::new().function("fail", |_| Err(anyhow::anyhow!("disk on fire").into())));
    let mut callable = CallableObject::new(registry, "fail");
    let err = callable.call().unwrap_err();
    assert!(matches!(err, CallError::Native(_)));
    assert_eq!(err.to_string(), "disk on fire");
}

// ============================================================================
// Parameter resolution
// ============================================================================

#[test]
fn test_nested_descriptor_parameter() {
    let registry = registry();
    let inner = CallableObject::new(registry.clone(), Value::closure(|_| Ok(Value::from("  fixed  "))));
    let mut outer = CallableObject::new(registry, "trim").with_parameter(inner);
    assert_eq!(outer.call().unwrap(), Value::from("fixed"));
    assert_eq!(outer.parameter(0), Some(&Value::from("  fixed  ")));
}

#[test]
fn test_closure_parameter() {
    let mut outer = CallableObject::new(registry(), "trim")
        .with_parameter(Value::closure(|_| Ok(Value::from(" from closure "))));
    assert_eq!(outer.call().unwrap(), Value::from("from closure"));
}

#[test]
fn test_static_pair_parameter_with_arguments() {
    let list = Value::List(vec![
        Value::List(vec![Value::from("TestClass"), Value::from("say_hello")]),
        Value::from("Bob"),
    ]);
    let mut outer = CallableObject::new(registry(), "trim").with_parameter(list);
    assert_eq!(outer.call().unwrap(), Value::from("Hello, Bob"));
}

#[test]
fn test_function_name_list_head_parameter() {
    let list = Value::List(vec![Value::from("trim"), Value::from("  listed  ")]);
    let mut outer = CallableObject::new(registry(), "trim").with_parameter(list);
    assert_eq!(outer.call().unwrap(), Value::from("listed"));
}

#[test]
fn test_unregistered_name_list_is_data() {
    let list = Value::List(vec![Value::from("shout"), Value::from("x")]);
    let mut outer = CallableObject::new(
        registry(),
        Value::closure(|args| Ok(args.into_iter().next().unwrap_or_default())),
    )
    .with_parameter(list.clone());
    assert_eq!(outer.call().unwrap(), list);
}

#[test]
fn test_string_parameter_naming_function_is_data() {
    let mut outer = CallableObject::new(registry(), "trim").with_parameter(" greeting ");
    assert_eq!(outer.call().unwrap(), Value::from("greeting"));
}

#[test]
fn test_side_effects_run_per_call() {
    let counter = Rc::new(Cell::new(0));
    let seen = Rc::clone(&counter);
    let registry = registry();
    let inner = CallableObject::new(
        registry.clone(),
        Value::closure(move |_| {
            seen.set(seen.get() + 1);
            Ok(Value::from(" x "))
        }),
    );
    let mut outer = CallableObject::new(registry, "trim").with_parameter(inner);
    outer.call().unwrap();
    // the resolved value replaced the descriptor, so a second call passes data
    outer.call().unwrap();
    assert_eq!(counter.get(), 1);
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_is_callable_repeatable() {
    let mut callable = CallableObject::new(registry(), "trim").with_parameter(" a ");
    assert!(callable.is_callable().unwrap());
    assert!(callable.is_callable().unwrap());
    assert_eq!(callable.callable_type().unwrap().as_str(), "FUNCTION_PARAMS");
}

#[test]
fn test_repeated_calls_return_same_result() {
    let mut callable = CallableObject::new(registry(), "greeting");
    let first = callable.call().unwrap();
    assert!(callable.was_called());
    let second = callable.call().unwrap();
    assert_eq!(first, second);
    assert!(callable.was_called());
}

#[test]
fn test_removing_params_after_prepare_drops_suffix() {
    let mut callable = CallableObject::new(registry(), "greeting").with_parameter("unused");
    callable.prepare().unwrap();
    assert_eq!(callable.callable_type().unwrap().as_str(), "FUNCTION_PARAMS");
    callable.remove_parameters();
    callable.call().unwrap();
    assert_eq!(callable.callable_type().unwrap().as_str(), "FUNCTION");
}

proptest! {
    /// The tag carries `_PARAMS` exactly when parameters are present.
    #[test]
    fn params_suffix_tracks_parameters(params in prop::collection::vec("[a-z ]{0,8}", 0..5)) {
        let mut callable = CallableObject::new(registry(), "TestClass::say_hello").with_parameters(params.clone());
        callable.prepare().unwrap();
        let ty = callable.callable_type().unwrap();
        prop_assert_eq!(ty.has_params(), !params.is_empty());
        prop_assert_eq!(ty.as_str().ends_with("_PARAMS"), !params.is_empty());
    }

    /// Any registered-function descriptor trims whatever string it is given.
    #[test]
    fn trim_dispatch_matches_str_trim(s in "\\PC{0,20}") {
        let mut callable = CallableObject::new(registry(), "trim").with_parameter(s.clone());
        prop_assert_eq!(callable.call().unwrap(), Value::from(s.trim()));
    }
}
