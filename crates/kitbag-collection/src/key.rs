//! Collection keys.

use std::fmt;

/// Key of a [`Collection`](crate::Collection) entry.
///
/// Entries are addressed either by a positional index (assigned automatically
/// by [`Collection::push`](crate::Collection::push)) or by a name.
///
/// # Example
///
/// ```
/// use kitbag_collection::Key;
///
/// assert_eq!(Key::from(0), Key::Index(0));
/// assert_eq!(Key::from("foo"), Key::Name("foo".into()));
/// assert_eq!(Key::parse("12"), Key::Index(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Positional index.
    Index(usize),
    /// Named entry.
    Name(String),
}

impl Key {
    /// Parses a textual key, treating plain decimal digits as an index.
    ///
    /// This mirrors how keys come back from JSON objects, where every key is a
    /// string.
    pub fn parse(s: &str) -> Self {
        let is_index = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        match s.parse::<usize>() {
            Ok(i) if is_index => Key::Index(i),
            _ => Key::Name(s.to_string()),
        }
    }

    /// Returns `true` if this is a positional key.
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Returns `true` if this is a named key.
    pub fn is_name(&self) -> bool {
        matches!(self, Key::Name(_))
    }

    /// Extracts the index, if positional.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Extracts the name, if named.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(n) => Some(n),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(n) => f.write_str(n),
        }
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::Name(s.clone())
    }
}

impl From<&Key> for Key {
    fn from(k: &Key) -> Self {
        k.clone()
    }
}
