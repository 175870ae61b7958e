//! Named helper functions dispatched through callables.

use std::rc::Rc;

use chrono::{Local, TimeZone, Utc};
use kitbag::functions::{self, app_date_with};
use kitbag::prelude::*;
use proptest::prelude::*;

const UNSET: &str = "KITBAG_TEST_ZONE_NEVER_SET";
const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn call(name: &str, args: Vec<Value>) -> Result<Value, CallError> {
    CallableObject::new(Rc::new(functions::registry()), name).call_with(args)
}

fn call_str(name: &str, args: Vec<Value>) -> String {
    call(name, args).unwrap().into_string().unwrap()
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn every_helper_is_registered() {
    let registry = functions::registry();
    for name in [
        "app_date",
        "array_join",
        "is_json",
        "str_from_camel",
        "str_kebab_case",
        "str_random",
        "str_random_alpha",
        "str_random_alphanum",
        "str_random_num",
        "str_slug",
        "str_snake_case",
        "str_title_case",
        "str_to_camel",
        "trim",
    ] {
        assert!(registry.has_function(name), "missing {}", name);
    }
}

#[test]
fn helpers_classify_as_functions() {
    let mut callable = CallableObject::new(Rc::new(functions::registry()), "str_slug");
    callable.prepare().unwrap();
    assert_eq!(callable.callable_type().unwrap().kind(), CallableKind::Function);
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn slug() {
    assert_eq!(call_str("str_slug", vec!["SEO Title".into()]), "seo-title");
    assert_eq!(call_str("str_slug", vec!["SEO Title".into(), "_".into()]), "seo_title");
}

#[test]
fn camel_conversions() {
    assert_eq!(call_str("str_from_camel", vec!["SomeString".into()]), "some-string");
    assert_eq!(call_str("str_to_camel", vec!["some-string".into(), "-".into()]), "someString");
    assert_eq!(call_str("str_title_case", vec!["some-string".into()]), "SomeString");
    assert_eq!(call_str("str_snake_case", vec!["someCamelCase".into()]), "some_camel_case");
    assert_eq!(call_str("str_kebab_case", vec!["someCamelCase".into()]), "some-camel-case");
    assert_eq!(
        call_str("str_snake_case", vec!["someCamelCase".into(), true.into()]),
        "some_Camel_Case"
    );
}

#[test]
fn random_strings() {
    assert_eq!(call_str("str_random", vec![6.into()]).chars().count(), 6);
    assert!(call_str("str_random_alpha", vec![6.into()])
        .chars()
        .all(|c| c.is_ascii_alphabetic()));
    assert!(call_str("str_random_num", vec![6.into()])
        .chars()
        .all(|c| c.is_ascii_digit()));
    assert!(call_str("str_random_alphanum", vec![6.into(), 2.into()])
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[test]
fn trim_rejects_non_strings() {
    let err = call("trim", vec![3.into()]).unwrap_err();
    assert!(matches!(err, CallError::InvalidArgument(_)));
    assert!(!err.is_preparation_error());
}

#[test]
fn random_rejects_unknown_case() {
    assert!(matches!(
        call("str_random", vec![4.into(), 7.into()]),
        Err(CallError::InvalidArgument(_))
    ));
}

// =============================================================================
// Arrays and JSON
// =============================================================================

#[test]
fn array_join() {
    let items = Value::from(vec![Value::from("a"), Value::from("b"), Value::from(3)]);
    assert_eq!(
        call_str("array_join", vec![items.clone(), ", ".into(), " and ".into()]),
        "a, b and 3"
    );
    assert_eq!(call_str("array_join", vec![items, "-".into()]), "a-b-3");
}

#[test]
fn is_json() {
    assert_eq!(call("is_json", vec![r#"{"ok": true}"#.into()]).unwrap(), Value::from(true));
    assert_eq!(call("is_json", vec!["{nope".into()]).unwrap(), Value::from(false));
    assert_eq!(call("is_json", vec![1.into()]).unwrap(), Value::from(false));
}

// =============================================================================
// app_date
// =============================================================================

#[test]
fn app_date_local_by_default() {
    let now = Utc::now().timestamp();
    let expected = Local.timestamp_opt(now, 0).unwrap().format(FORMAT).to_string();
    assert_eq!(app_date_with(FORMAT, Some(now), UNSET, None).unwrap(), expected);
}

#[test]
fn app_date_utc() {
    let now = Utc::now().timestamp();
    let expected = Utc.timestamp_opt(now, 0).unwrap().format(FORMAT).to_string();
    assert_eq!(app_date_with(FORMAT, Some(now), UNSET, Some("UTC")).unwrap(), expected);
    assert_eq!(app_date_with(FORMAT, Some(now), UNSET, Some("0")).unwrap(), expected);
}

#[test]
fn app_date_numeric_offset() {
    let now = Utc::now().timestamp();
    let expected = Utc.timestamp_opt(now, 0).unwrap().format(FORMAT).to_string();
    assert_eq!(
        app_date_with(FORMAT, Some(now + 3600), UNSET, Some("-1")).unwrap(),
        expected
    );
}

#[test]
fn app_date_through_registry() {
    let value = call("app_date", vec!["%Y".into(), Value::Int(0)]).unwrap();
    let year = value.into_string().unwrap();
    assert!(year == "1970" || year == "1969");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn random_length_matches(len in 0i64..64) {
        prop_assert_eq!(call_str("str_random", vec![len.into()]).chars().count(), len as usize);
    }

    /// Snake-casing then camel-casing restores a lower camel identifier.
    #[test]
    fn snake_then_camel(word in "[a-z]{1,6}(?:[A-Z][a-z]{1,6}){0,3}") {
        let snake = call_str("str_snake_case", vec![word.clone().into()]);
        let camel = call_str("str_to_camel", vec![snake.into(), "_".into()]);
        prop_assert_eq!(camel, word);
    }
}
