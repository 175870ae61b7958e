//! File name parts, size and mime type.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{FileError, Result};
use crate::mime::{mime_type_for, DEFAULT_MIME_TYPE};

/// Metadata describing a file path.
///
/// Built from a path whether or not the file exists; the size is filled in
/// only for existing files. Setting the extension also sets the mime type.
///
/// # Example
///
/// ```
/// use kitbag_file::FileInfo;
///
/// let info = FileInfo::new("/var/www/report.PDF");
/// assert_eq!(info.basename(), Some("report.PDF"));
/// assert_eq!(info.filename(), Some("report"));
/// assert_eq!(info.extension(), Some("PDF"));
/// assert_eq!(info.mime_type(), Some("application/pdf"));
/// assert_eq!(info.to_string(), "/var/www/report.PDF");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    basename: Option<String>,
    filename: Option<String>,
    extension: Option<String>,
    path: Option<PathBuf>,
    size: u64,
    mime_type: Option<String>,
}

impl FileInfo {
    /// Describes `path` without requiring it to exist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut info = FileInfo::default();

        if let Some(name) = path.file_name() {
            info.basename = Some(name.to_string_lossy().into_owned());
        }
        if let Some(stem) = path.file_stem() {
            info.filename = Some(stem.to_string_lossy().into_owned());
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            info.path = Some(parent.to_path_buf());
        }
        if let Some(extension) = path.extension() {
            info.set_extension(extension.to_string_lossy());
        }
        if let Ok(metadata) = fs::metadata(path) {
            info.size = metadata.len();
        }
        info
    }

    /// Describes an existing file.
    ///
    /// # Errors
    ///
    /// [`FileError::NotFound`] if nothing exists at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        Ok(Self::new(path))
    }

    pub fn set_basename(&mut self, basename: impl Into<String>) -> &mut Self {
        self.basename = Some(basename.into());
        self
    }

    pub fn basename(&self) -> Option<&str> {
        self.basename.as_deref()
    }

    pub fn has_basename(&self) -> bool {
        self.basename.is_some()
    }

    /// Sets the file name without its extension.
    pub fn set_filename(&mut self, filename: impl Into<String>) -> &mut Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn has_filename(&self) -> bool {
        self.filename.is_some()
    }

    /// Sets the extension and derives the mime type from it.
    pub fn set_extension(&mut self, extension: impl Into<String>) -> &mut Self {
        let extension = extension.into();
        self.mime_type = Some(mime_type_for(&extension).to_string());
        self.extension = Some(extension);
        self
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    /// Sets the containing directory.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.path = Some(path.into());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }

    pub fn set_size(&mut self, size: u64) -> &mut Self {
        self.size = size;
        self
    }

    /// Size in bytes; zero when unknown.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn has_size(&self) -> bool {
        self.size > 0
    }

    pub fn set_mime_type(&mut self, mime_type: impl Into<String>) -> &mut Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn set_default_mime_type(&mut self) -> &mut Self {
        self.mime_type = Some(DEFAULT_MIME_TYPE.to_string());
        self
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn has_mime_type(&self) -> bool {
        self.mime_type.is_some()
    }

    pub fn is_default_mime_type(&self) -> bool {
        self.mime_type.as_deref() == Some(DEFAULT_MIME_TYPE)
    }

    /// Directory joined with the basename.
    pub fn full_path(&self) -> PathBuf {
        let basename = self.basename.as_deref().unwrap_or_default();
        match &self.path {
            Some(dir) => dir.join(basename),
            None => PathBuf::from(basename),
        }
    }

    pub fn exists(&self) -> bool {
        self.full_path().exists()
    }

    /// Reads the whole file as UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        let path = self.full_path();
        fs::read_to_string(&path).map_err(|source| FileError::Io { path, source })
    }
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path().display())
    }
}

/// Mime type of the file at `path`, derived from its extension.
///
/// Returns `None` when the path has no extension.
pub fn file_mime_type(path: impl AsRef<Path>) -> Option<String> {
    FileInfo::new(path).mime_type
}
