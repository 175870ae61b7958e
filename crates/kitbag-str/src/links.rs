//! Turning plain-text URLs and e-mail addresses into anchors.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(http|https|ftp|ftps)://[a-zA-Z0-9\-.]+\.[a-zA-Z]{2,3}(/\S*)?").expect("url pattern is valid")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9.\-_+%]+@[a-zA-Z0-9\-_.]+\.[a-zA-Z]{2,4}").expect("email pattern is valid")
});

/// Extra attributes added to every generated anchor.
///
/// ```
/// use kitbag_str::{create_links, LinkOptions};
///
/// let options = LinkOptions::new().attribute("target", "_blank");
/// assert_eq!(
///     create_links("see http://test.com", &options),
///     r#"see <a target="_blank" href="http://test.com">http://test.com</a>"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
    attributes: Vec<(String, String)>,
}

impl LinkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute. Attributes are emitted in insertion order.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    fn anchor_open(&self) -> String {
        let mut open = String::from("<a ");
        for (name, value) in &self.attributes {
            // `$` would otherwise be read as a capture reference
            open.push_str(&format!("{}=\"{}\" ", name, value).replace('$', "$$"));
        }
        open
    }
}

/// Wraps URLs (`http`, `https`, `ftp`, `ftps`) and e-mail addresses found in
/// `input` in anchor tags. E-mail addresses link to `mailto:`.
pub fn create_links(input: &str, options: &LinkOptions) -> String {
    let open = options.anchor_open();
    let url_replacement = format!(r#"{}href="$0">$0</a>"#, open);
    let email_replacement = format!(r#"{}href="mailto:$0">$0</a>"#, open);

    let linked = URL_PATTERN.replace_all(input, url_replacement.as_str());
    EMAIL_PATTERN
        .replace_all(&linked, email_replacement.as_str())
        .into_owned()
}
