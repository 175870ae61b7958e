//! Extension to mime type lookup.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// Mime type used for unknown extensions.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

static MIME_TYPES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("avi", "video/x-msvideo"),
        ("bin", "application/octet-stream"),
        ("bmp", "image/bmp"),
        ("bz", "application/x-bzip"),
        ("bz2", "application/x-bzip2"),
        ("css", "text/css"),
        ("csv", "text/csv"),
        ("doc", "application/msword"),
        ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        ("gz", "application/gzip"),
        ("gif", "image/gif"),
        ("htm", "text/html"),
        ("html", "text/html"),
        ("ico", "image/vnd.microsoft.icon"),
        ("ics", "text/calendar"),
        ("jar", "application/java-archive"),
        ("jpe", "image/jpeg"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("js", "text/javascript"),
        ("json", "application/json"),
        ("jwt", "application/jwt"),
        ("log", "text/plain"),
        ("mid", "audio/midi"),
        ("midi", "audio/midi"),
        ("mp3", "audio/mpeg"),
        ("mp4", "video/mp4"),
        ("mpeg", "video/mpeg"),
        ("odp", "application/vnd.oasis.opendocument.presentation"),
        ("ods", "application/vnd.oasis.opendocument.spreadsheet"),
        ("odt", "application/vnd.oasis.opendocument.text"),
        ("oga", "audio/ogg"),
        ("ogv", "video/ogg"),
        ("ogx", "application/ogg"),
        ("otf", "font/otf"),
        ("png", "image/png"),
        ("pdf", "application/pdf"),
        ("php", "application/x-httpd-php"),
        ("ppt", "application/vnd.ms-powerpoint"),
        ("pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation"),
        ("psd", "image/vnd.adobe.photoshop"),
        ("rar", "application/vnd.rar"),
        ("rs", "text/x-rust"),
        ("rtf", "application/rtf"),
        ("sgml", "application/sgml"),
        ("sql", "application/sql"),
        ("svg", "image/svg+xml"),
        ("tar", "application/x-tar"),
        ("tif", "image/tiff"),
        ("tiff", "image/tiff"),
        ("toml", "application/toml"),
        ("ttf", "font/ttf"),
        ("tsv", "text/tsv"),
        ("txt", "text/plain"),
        ("wav", "audio/wav"),
        ("xhtml", "application/xhtml+xml"),
        ("xls", "application/vnd.ms-excel"),
        ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        ("xml", "application/xml"),
        ("yaml", "application/yaml"),
        ("zip", "application/zip"),
    ])
});

/// The full extension table, keyed by lower-case extension.
pub fn mime_types() -> &'static BTreeMap<&'static str, &'static str> {
    &MIME_TYPES
}

/// Looks up the mime type for an extension, ignoring case.
///
/// ```
/// use kitbag_file::{mime_type_for, DEFAULT_MIME_TYPE};
///
/// assert_eq!(mime_type_for("JPEG"), "image/jpeg");
/// assert_eq!(mime_type_for("foo"), DEFAULT_MIME_TYPE);
/// ```
pub fn mime_type_for(extension: &str) -> &'static str {
    MIME_TYPES
        .get(extension.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_MIME_TYPE)
}
