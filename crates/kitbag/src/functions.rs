//! Helper functions exposed by name for dynamic dispatch.
//!
//! [`registry`] returns a [`Registry`] in which each helper below is a named
//! function, so descriptors such as `"str_slug"` resolve and run through
//! [`CallableObject`](kitbag_callable::CallableObject).
//!
//! | Name | Arguments |
//! |------|-----------|
//! | `trim` | string |
//! | `str_slug` | string, separator = `"-"` |
//! | `str_random` | length, case = 0 |
//! | `str_random_alpha` | length, case = 0 |
//! | `str_random_num` | length |
//! | `str_random_alphanum` | length, case = 0 |
//! | `str_from_camel` | string, separator = `"-"`, preserve case = false |
//! | `str_to_camel` | string, separator = `"-"` |
//! | `str_title_case` | string, separator = `"-"` |
//! | `str_snake_case` | string, preserve case = false |
//! | `str_kebab_case` | string, preserve case = false |
//! | `array_join` | list, glue, final glue = `""` |
//! | `is_json` | value |
//! | `app_date` | format, timestamp = now |
//!
//! Random case codes are 0 for mixed, 1 for lower and 2 for upper case.

use chrono::{FixedOffset, Local, TimeZone, Utc};
use kitbag_callable::{CallError, Registry, Value};
use kitbag_collection::arr;
use kitbag_datetime::{validate_format, DateTimeError};
use kitbag_str::{convert, from_camel_case, to_camel_case, Case, RandomCase};

/// Environment variable read by [`app_date`].
pub const APP_TIMEZONE: &str = "APP_TIMEZONE";

/// Returns `true` if `input` parses as JSON.
///
/// ```
/// use kitbag::functions::is_json;
///
/// assert!(is_json(r#"{"a": [1, 2]}"#));
/// assert!(!is_json("{a: 1}"));
/// ```
pub fn is_json(input: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(input).is_ok()
}

/// Formats a timestamp in the application time zone.
///
/// The zone comes from the `APP_TIMEZONE` environment variable; see
/// [`app_date_with`].
pub fn app_date(format: &str, timestamp: Option<i64>) -> Result<String, DateTimeError> {
    app_date_with(format, timestamp, APP_TIMEZONE, None)
}

/// Formats a timestamp in the zone named by the environment variable `env`.
///
/// The variable, or `env_default` when it is unset, is read as `"UTC"` or a
/// numeric hour offset such as `"-1"` or `"5.5"`. Anything else, including no
/// value at all, uses the local zone. `timestamp` defaults to now.
pub fn app_date_with(
    format: &str,
    timestamp: Option<i64>,
    env: &str,
    env_default: Option<&str>,
) -> Result<String, DateTimeError> {
    validate_format(format)?;
    let utc = match timestamp {
        Some(seconds) => Utc
            .timestamp_opt(seconds, 0)
            .single()
            .ok_or_else(|| DateTimeError::Unrecognized(seconds.to_string()))?,
        None => Utc::now(),
    };
    let zone = std::env::var(env).ok().or_else(|| env_default.map(str::to_string));

    let rendered = match zone.as_deref().map(str::trim) {
        Some(zone) if zone.eq_ignore_ascii_case("UTC") => utc.format(format).to_string(),
        Some(zone) => match zone.parse::<f64>() {
            Ok(hours) => {
                let offset = hour_offset(hours).ok_or_else(|| DateTimeError::Unrecognized(zone.to_string()))?;
                utc.with_timezone(&offset).format(format).to_string()
            }
            Err(_) => utc.with_timezone(&Local).format(format).to_string(),
        },
        None => utc.with_timezone(&Local).format(format).to_string(),
    };
    Ok(rendered)
}

fn hour_offset(hours: f64) -> Option<FixedOffset> {
    let seconds = (hours * 3600.0).round();
    if !seconds.is_finite() || seconds.abs() >= 86_400.0 {
        return None;
    }
    FixedOffset::east_opt(seconds as i32)
}

/// Builds a registry holding every helper listed in the module docs.
///
/// ```
/// use std::rc::Rc;
/// use kitbag::functions;
/// use kitbag::{CallableObject, Value};
///
/// let registry = Rc::new(functions::registry());
/// let mut slug = CallableObject::new(registry, "str_slug").with_parameter("SEO Title");
/// assert_eq!(slug.call().unwrap(), Value::from("seo-title"));
/// ```
pub fn registry() -> Registry {
    Registry::new()
        .function("trim", |args| Ok(Value::from(str_arg(&args, 0, "trim")?.trim())))
        .function("str_slug", |args| {
            let input = str_arg(&args, 0, "str_slug")?;
            let separator = opt_str_arg(&args, 1, "str_slug")?.unwrap_or("-");
            Ok(Value::from(kitbag_str::slug(input, separator)))
        })
        .function("str_random", |args| {
            let (length, case) = random_args(&args, "str_random")?;
            Ok(Value::from(kitbag_str::random(length, case)))
        })
        .function("str_random_alpha", |args| {
            let (length, case) = random_args(&args, "str_random_alpha")?;
            Ok(Value::from(kitbag_str::random_alpha(length, case)))
        })
        .function("str_random_num", |args| {
            let length = length_arg(&args, 0, "str_random_num")?;
            Ok(Value::from(kitbag_str::random_numeric(length)))
        })
        .function("str_random_alphanum", |args| {
            let (length, case) = random_args(&args, "str_random_alphanum")?;
            Ok(Value::from(kitbag_str::random_alphanumeric(length, case)))
        })
        .function("str_from_camel", |args| {
            let input = str_arg(&args, 0, "str_from_camel")?;
            let separator = opt_str_arg(&args, 1, "str_from_camel")?.unwrap_or("-");
            let preserve = opt_bool_arg(&args, 2, "str_from_camel")?;
            Ok(Value::from(from_camel_case(input, separator, preserve)))
        })
        .function("str_to_camel", |args| {
            let input = str_arg(&args, 0, "str_to_camel")?;
            let separator = opt_str_arg(&args, 1, "str_to_camel")?.unwrap_or("-");
            Ok(Value::from(to_camel_case(input, separator)))
        })
        .function("str_title_case", |args| {
            let input = str_arg(&args, 0, "str_title_case")?;
            let separator = opt_str_arg(&args, 1, "str_title_case")?.unwrap_or("-");
            let camel = to_camel_case(input, separator);
            Ok(Value::from(convert(&camel, Case::CamelCase, Case::TitleCase)))
        })
        .function("str_snake_case", |args| {
            let input = str_arg(&args, 0, "str_snake_case")?;
            let preserve = opt_bool_arg(&args, 1, "str_snake_case")?;
            Ok(Value::from(from_camel_case(input, "_", preserve)))
        })
        .function("str_kebab_case", |args| {
            let input = str_arg(&args, 0, "str_kebab_case")?;
            let preserve = opt_bool_arg(&args, 1, "str_kebab_case")?;
            Ok(Value::from(from_camel_case(input, "-", preserve)))
        })
        .function("array_join", |args| {
            let items: Vec<String> = match args.first() {
                Some(Value::List(items)) => items.iter().map(Value::to_string).collect(),
                _ => return Err(expected("array_join", 0, "a list")),
            };
            let glue = str_arg(&args, 1, "array_join")?;
            let final_glue = opt_str_arg(&args, 2, "array_join")?.unwrap_or("");
            Ok(Value::from(arr::join(&items, glue, final_glue)))
        })
        .function("is_json", |args| {
            Ok(Value::from(args.first().and_then(Value::as_str).is_some_and(is_json)))
        })
        .function("app_date", |args| {
            let format = str_arg(&args, 0, "app_date")?;
            let timestamp = match args.get(1) {
                None | Some(Value::Null) => None,
                Some(Value::Int(seconds)) => Some(*seconds),
                Some(_) => return Err(expected("app_date", 1, "an integer timestamp")),
            };
            app_date(format, timestamp)
                .map(Value::from)
                .map_err(|err| CallError::invalid_argument(err.to_string()))
        })
}

fn expected(function: &str, index: usize, what: &str) -> CallError {
    CallError::invalid_argument(format!("{} expects {} as argument {}", function, what, index + 1))
}

fn str_arg<'a>(args: &'a [Value], index: usize, function: &str) -> Result<&'a str, CallError> {
    args.get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| expected(function, index, "a string"))
}

fn opt_str_arg<'a>(args: &'a [Value], index: usize, function: &str) -> Result<Option<&'a str>, CallError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Str(s)) => Ok(Some(s)),
        Some(_) => Err(expected(function, index, "a string")),
    }
}

fn opt_bool_arg(args: &[Value], index: usize, function: &str) -> Result<bool, CallError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(expected(function, index, "a boolean")),
    }
}

fn length_arg(args: &[Value], index: usize, function: &str) -> Result<usize, CallError> {
    args.get(index)
        .and_then(Value::as_int)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| expected(function, index, "a non-negative length"))
}

fn random_args(args: &[Value], function: &str) -> Result<(usize, RandomCase), CallError> {
    let length = length_arg(args, 0, function)?;
    let case = match args.get(1) {
        None | Some(Value::Null) | Some(Value::Int(0)) => RandomCase::Mixed,
        Some(Value::Int(1)) => RandomCase::Lower,
        Some(Value::Int(2)) => RandomCase::Upper,
        Some(_) => return Err(expected(function, 1, "a case code of 0, 1 or 2")),
    };
    Ok((length, case))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_offset_bounds() {
        assert_eq!(hour_offset(-1.0), FixedOffset::west_opt(3600));
        assert_eq!(hour_offset(5.5), FixedOffset::east_opt(19_800));
        assert!(hour_offset(24.0).is_none());
        assert!(hour_offset(f64::NAN).is_none());
    }

    #[test]
    fn test_invalid_app_date_format() {
        assert!(matches!(
            app_date_with("%Y-%!", Some(0), "KITBAG_TEST_UNSET_ZONE", Some("UTC")),
            Err(DateTimeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_bad_numeric_zone() {
        assert!(matches!(
            app_date_with("%Y", Some(0), "KITBAG_TEST_UNSET_ZONE", Some("99")),
            Err(DateTimeError::Unrecognized(_))
        ));
    }
}
