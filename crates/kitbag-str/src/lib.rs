//! String helpers.
//!
//! - [`convert`] / [`Conversion`]: switch between title, camel, kebab, snake,
//!   namespace, path and URL styles
//! - [`slug`]: URL slugs with transliteration
//! - [`create_links`]: wrap URLs and e-mail addresses in anchors
//! - [`random`] and friends: random strings from unambiguous alphabets
//!
//! ```rust
//! use kitbag_str::{convert, slug, Case};
//!
//! assert_eq!(convert("snake_case_string", Case::SnakeCase, Case::TitleCase), "SnakeCaseString");
//! assert_eq!(slug("Hello World | Home Page", "-"), "hello-world-home-page");
//! ```

mod case;
mod error;
mod links;
mod random;
mod slug;

pub use case::{convert, convert_with, from_camel_case, to_camel_case, Case, Conversion};
pub use error::{Result, StrError};
pub use links::{create_links, LinkOptions};
pub use random::{random, random_alpha, random_alphanumeric, random_from, random_numeric, RandomCase};
pub use slug::slug;
