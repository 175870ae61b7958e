//! Case conversion between identifier styles.
//!
//! Seven styles are recognised:
//!
//! | Case | Example | Separator | Keeps case by default |
//! |------|---------|-----------|-----------------------|
//! | `TitleCase` | `TitleCase` | none | yes |
//! | `CamelCase` | `camelCase` | none | yes |
//! | `KebabCase` (`dash`) | `kebab-case` | `-` | no |
//! | `SnakeCase` (`underscore`) | `snake_case` | `_` | no |
//! | `Namespace` | `Name\Space` | `\` | yes |
//! | `Path` | `some/path` | platform separator | yes |
//! | `Url` (`uri`) | `some/url` | `/` | yes |
//!
//! Converting out of title or camel case splits before each upper-case
//! letter. Converting between separated styles swaps separators; when case is
//! preserved, each segment's first letter is upper-cased.
//!
//! ```
//! use kitbag_str::{convert, convert_with, Case};
//!
//! assert_eq!(convert("TitleCase", Case::TitleCase, Case::SnakeCase), "title_case");
//! assert_eq!(convert("dashed-string", Case::KebabCase, Case::Namespace), "Dashed\\String");
//! assert_eq!(convert_with("Path/String", Case::Path, Case::KebabCase, true), "Path-String");
//! ```
//!
//! Method-style names, as used by dynamic dispatchers, can be parsed with
//! [`Conversion::parse`]:
//!
//! ```
//! use kitbag_str::Conversion;
//!
//! let conversion = Conversion::parse("camelCaseToSnakeCase").unwrap();
//! assert_eq!(conversion.apply("camelCase"), "camel_case");
//! ```

use std::fmt;
use std::path::MAIN_SEPARATOR_STR;
use std::str::FromStr;

use crate::error::{Result, StrError};

/// An identifier style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    TitleCase,
    CamelCase,
    KebabCase,
    SnakeCase,
    Namespace,
    Path,
    Url,
}

impl Case {
    /// Word separator, or `None` for title and camel case.
    pub fn separator(&self) -> Option<&'static str> {
        match self {
            Case::TitleCase | Case::CamelCase => None,
            Case::KebabCase => Some("-"),
            Case::SnakeCase => Some("_"),
            Case::Namespace => Some("\\"),
            Case::Path => Some(MAIN_SEPARATOR_STR),
            Case::Url => Some("/"),
        }
    }

    /// Whether conversions into this case keep letter case unless told
    /// otherwise.
    pub fn preserves_case(&self) -> bool {
        !matches!(self, Case::KebabCase | Case::SnakeCase)
    }

    fn is_camel(&self) -> bool {
        matches!(self, Case::TitleCase | Case::CamelCase)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Case::TitleCase => "titlecase",
            Case::CamelCase => "camelcase",
            Case::KebabCase => "kebabcase",
            Case::SnakeCase => "snakecase",
            Case::Namespace => "namespace",
            Case::Path => "path",
            Case::Url => "url",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Case {
    type Err = StrError;

    /// Parses a case name, ignoring letter case, `-` and `_`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "titlecase" | "title" => Ok(Case::TitleCase),
            "camelcase" | "camel" => Ok(Case::CamelCase),
            "kebabcase" | "kebab" | "dash" => Ok(Case::KebabCase),
            "snakecase" | "snake" | "underscore" => Ok(Case::SnakeCase),
            "namespace" => Ok(Case::Namespace),
            "path" => Ok(Case::Path),
            "url" | "uri" => Ok(Case::Url),
            _ => Err(StrError::UnknownCase(s.to_string())),
        }
    }
}

/// A conversion from one case to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    from: Case,
    to: Case,
    preserve_case: Option<bool>,
}

impl Conversion {
    pub fn new(from: Case, to: Case) -> Self {
        Self {
            from,
            to,
            preserve_case: None,
        }
    }

    /// Overrides the target's default case preservation.
    ///
    /// Ignored for title and camel targets, which always keep case.
    pub fn preserve_case(mut self, preserve: bool) -> Self {
        self.preserve_case = Some(preserve);
        self
    }

    /// Parses names like `titleCaseToSnakeCase` or `dashToPath`.
    pub fn parse(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        let mut parts = lower.split("to");
        match (parts.next(), parts.next(), parts.next()) {
            (Some(from), Some(to), None) if !from.is_empty() && !to.is_empty() => {
                Ok(Self::new(from.parse()?, to.parse()?))
            }
            _ => Err(StrError::InvalidConversion(name.to_string())),
        }
    }

    pub fn source(&self) -> Case {
        self.from
    }

    pub fn target(&self) -> Case {
        self.to
    }

    /// Applies the conversion.
    pub fn apply(&self, input: &str) -> String {
        let preserve = if self.to.is_camel() {
            true
        } else {
            self.preserve_case.unwrap_or_else(|| self.to.preserves_case())
        };
        let separator = self.to.separator().unwrap_or("");

        if self.from.is_camel() {
            let converted = from_camel_case(input, separator, preserve);
            return match self.to {
                Case::TitleCase => upper_first(&converted),
                Case::CamelCase => lower_first(&converted),
                _ => converted,
            };
        }

        let previous = self.from.separator().unwrap_or("");
        match self.to {
            Case::TitleCase => upper_first(&to_camel_case(input, previous)),
            Case::CamelCase => lower_first(&to_camel_case(input, previous)),
            _ => {
                let source = if preserve {
                    split_words(input, previous)
                        .map(upper_first)
                        .collect::<Vec<_>>()
                        .join(previous)
                } else {
                    input.to_string()
                };
                let replaced = if previous.is_empty() {
                    source
                } else {
                    source.replace(previous, separator)
                };
                if preserve {
                    replaced
                } else {
                    replaced.to_lowercase()
                }
            }
        }
    }
}

/// Converts `input` from one case to another using the target's default
/// case preservation.
pub fn convert(input: &str, from: Case, to: Case) -> String {
    Conversion::new(from, to).apply(input)
}

/// Like [`convert`], with explicit case preservation.
pub fn convert_with(input: &str, from: Case, to: Case, preserve_case: bool) -> String {
    Conversion::new(from, to).preserve_case(preserve_case).apply(input)
}

/// Inserts `separator` before every upper-case letter after the first
/// character, lower-casing the result unless `preserve_case` is set.
///
/// ```
/// use kitbag_str::from_camel_case;
///
/// assert_eq!(from_camel_case("someCamelCase", "_", false), "some_camel_case");
/// assert_eq!(from_camel_case("SomeTitle", " ", true), "Some Title");
/// ```
pub fn from_camel_case(input: &str, separator: &str, preserve_case: bool) -> String {
    let mut converted = String::with_capacity(input.len() + separator.len() * 4);
    for (i, c) in input.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            converted.push_str(separator);
        }
        converted.push(c);
    }
    if preserve_case {
        converted
    } else {
        converted.to_lowercase()
    }
}

/// Joins `separator`-delimited words, upper-casing the first letter of every
/// word after the first.
///
/// ```
/// use kitbag_str::to_camel_case;
///
/// assert_eq!(to_camel_case("snake_case_string", "_"), "snakeCaseString");
/// ```
pub fn to_camel_case(input: &str, separator: &str) -> String {
    split_words(input, separator)
        .enumerate()
        .map(|(i, word)| if i == 0 { word.to_string() } else { upper_first(word) })
        .collect()
}

fn split_words<'a>(input: &'a str, separator: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    if separator.is_empty() {
        Box::new(std::iter::once(input))
    } else {
        Box::new(input.split(separator))
    }
}

pub(crate) fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_aliases() {
        assert_eq!("dash".parse::<Case>().unwrap(), Case::KebabCase);
        assert_eq!("underscore".parse::<Case>().unwrap(), Case::SnakeCase);
        assert_eq!("uri".parse::<Case>().unwrap(), Case::Url);
        assert_eq!("Title_Case".parse::<Case>().unwrap(), Case::TitleCase);
        assert!(matches!("shouting".parse::<Case>(), Err(StrError::UnknownCase(_))));
    }

    #[test]
    fn test_parse_conversion() {
        let c = Conversion::parse("kebabCaseToUnderscore").unwrap();
        assert_eq!((c.source(), c.target()), (Case::KebabCase, Case::SnakeCase));
        assert!(matches!(
            Conversion::parse("camelCase"),
            Err(StrError::InvalidConversion(_))
        ));
        assert!(matches!(
            Conversion::parse("camelToPascal"),
            Err(StrError::UnknownCase(_))
        ));
    }

    #[test]
    fn test_first_letter_helpers() {
        assert_eq!(upper_first("émile"), "Émile");
        assert_eq!(lower_first("ABC"), "aBC");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_camel_to_camel_is_identity_apart_from_first_letter() {
        assert_eq!(convert("someValue", Case::CamelCase, Case::TitleCase), "SomeValue");
        assert_eq!(convert("SomeValue", Case::TitleCase, Case::TitleCase), "SomeValue");
    }

    #[test]
    fn test_preserve_ignored_for_camel_targets() {
        assert_eq!(
            convert_with("snake_case", Case::SnakeCase, Case::CamelCase, false),
            "snakeCase"
        );
    }
}
