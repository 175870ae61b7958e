//! URL slugs.

use deunicode::deunicode;

/// Builds a URL slug from arbitrary text.
///
/// The text is transliterated to ASCII and lower-cased. Anything other than
/// letters, digits, spaces, `-` and `/` is dropped, spaces become
/// `separator`, and runs of the separator collapse into one.
///
/// ```
/// use kitbag_str::slug;
///
/// assert_eq!(slug("Hello World | Home Page", "-"), "hello-world-home-page");
/// assert_eq!(slug("Crème Brûlée", "_"), "creme_brulee");
/// ```
pub fn slug(input: &str, separator: &str) -> String {
    let transliterated = deunicode(input).to_lowercase();
    let kept: String = transliterated
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '/'))
        .collect();
    let mut slug = kept.replace(' ', separator);
    if !separator.is_empty() {
        let doubled = separator.repeat(2);
        while slug.contains(&doubled) {
            slug = slug.replace(&doubled, separator);
        }
    }
    slug
}
