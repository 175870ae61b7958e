//! Free-standing array helpers.
//!
//! These operate on slices, [`Collection`]s, or dynamic JSON values and never
//! mutate their inputs except for [`pull`].

use serde_json::Value;

use crate::collection::Collection;
use crate::key::Key;

/// Joins items with `glue`, using `final_glue` before the last item.
///
/// An empty `final_glue` behaves like a plain join.
///
/// ```
/// use kitbag_collection::arr;
///
/// assert_eq!(arr::join(&["a", "b", "c"], ", ", " and "), "a, b and c");
/// assert_eq!(arr::join(&["a", "b", "c"], ", ", ""), "a, b, c");
/// ```
pub fn join<S: AsRef<str>>(items: &[S], glue: &str, final_glue: &str) -> String {
    let parts: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    if final_glue.is_empty() {
        return parts.join(glue);
    }
    match parts.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{}{}{}", rest.join(glue), final_glue, last),
    }
}

/// Splits `s` on `separator`, producing at most `limit` pieces.
pub fn split(s: &str, separator: &str, limit: Option<usize>) -> Vec<String> {
    match limit {
        Some(n) => s.splitn(n.max(1), separator).map(str::to_string).collect(),
        None => s.split(separator).map(str::to_string).collect(),
    }
}

/// Takes the first `n` items, or the last `|n|` items when `n` is negative.
pub fn limit<T: Clone>(items: &[T], n: isize) -> Vec<T> {
    let count = n.unsigned_abs().min(items.len());
    if n < 0 {
        items[items.len() - count..].to_vec()
    } else {
        items[..count].to_vec()
    }
}

/// Returns a copy of `collection` with `value` placed first.
///
/// Without a key the value becomes index `0` and positional keys are
/// renumbered. With a key, an existing entry under that key is dropped.
pub fn prepend<V: Clone>(collection: &Collection<V>, value: V, key: Option<Key>) -> Collection<V> {
    let mut result = Collection::new();
    match key {
        None => {
            result.push(value);
            result.extend(collection.clone());
        }
        Some(key) => {
            result.insert(key.clone(), value);
            for (k, v) in collection.iter() {
                if *k != key {
                    result.insert(k.clone(), v.clone());
                }
            }
        }
    }
    result
}

/// Removes the entry under `key` and returns its value.
pub fn pull<V>(collection: &mut Collection<V>, key: impl Into<Key>) -> Option<V> {
    collection.remove(key)
}

/// Splits a collection into its keys and its values.
pub fn divide<V: Clone>(collection: &Collection<V>) -> (Vec<Key>, Vec<V>) {
    collection
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .unzip()
}

/// Merges the elements of every nested array (or object values) into one
/// list. Scalars at the top level are skipped.
pub fn collapse(items: &[Value]) -> Vec<Value> {
    let mut collapsed = Vec::new();
    for item in items {
        match item {
            Value::Array(values) => collapsed.extend(values.iter().cloned()),
            Value::Object(map) => collapsed.extend(map.values().cloned()),
            _ => {}
        }
    }
    collapsed
}

/// Flattens nested arrays and objects into a single list.
///
/// `depth` limits how many levels are unwrapped; `None` flattens completely.
pub fn flatten(items: &[Value], depth: Option<usize>) -> Vec<Value> {
    let mut flattened = Vec::new();
    for item in items {
        let nested: Vec<Value> = match item {
            Value::Array(values) => values.clone(),
            Value::Object(map) => map.values().cloned().collect(),
            other => {
                flattened.push(other.clone());
                continue;
            }
        };
        match depth {
            Some(0) => flattened.push(item.clone()),
            Some(1) => flattened.extend(nested),
            Some(d) => flattened.extend(flatten(&nested, Some(d - 1))),
            None => flattened.extend(flatten(&nested, None)),
        }
    }
    flattened
}

/// Wraps a value in a list unless it already is one. `null` becomes empty.
pub fn make(value: Value) -> Vec<Value> {
    match value {
        Value::Array(values) => values,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}
