use std::path::{is_separator, Path};

use crate::error::SiftError;

/// A filepath split into its directory, base name, and extension.
///
/// `extension` keeps its leading dot (`".txt"`), and is empty when the last
/// segment has none. A name made only of leading dots plus a stem
/// (`".bashrc"`) has no extension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileComponents {
    /// Everything before the final separator. Empty if there is none.
    pub directory: String,

    /// The final segment with `extension` removed.
    pub base_name: String,

    /// The final dot-delimited suffix of the last segment, dot included.
    pub extension: String,
}

impl FileComponents {
    /// Decompose a [`Path`].
    ///
    /// # Errors
    ///
    /// Returns [`SiftError::InvalidPath`] if the path is not valid unicode.
    pub fn from_path(path: &Path) -> Result<Self, SiftError> {
        path.to_str()
            .map(extract_file_components)
            .ok_or_else(|| SiftError::InvalidPath(path.to_path_buf()))
    }

    /// The last path segment: base name followed by extension.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.base_name, self.extension)
    }

    /// Consume into a `(directory, base_name, extension)` triple.
    pub fn into_parts(self) -> (String, String, String) {
        (self.directory, self.base_name, self.extension)
    }
}

/// Split `filepath` into `(directory, base_name, extension)`.
///
/// Both `/` and the platform's native separator are recognised. Trailing
/// separators are trimmed from `directory` unless it is made only of
/// separators (the filesystem root).
///
/// # Example
///
/// ```rust
/// use filesift::extract_file_components;
///
/// let c = extract_file_components("/my/super/path/name.txt");
/// assert_eq!(c.directory, "/my/super/path");
/// assert_eq!(c.base_name, "name");
/// assert_eq!(c.extension, ".txt");
///
/// let c = extract_file_components("name");
/// assert_eq!(c.into_parts(), ("".into(), "name".into(), "".into()));
/// ```
pub fn extract_file_components(filepath: &str) -> FileComponents {
    let (directory, file_name) = split_directory(filepath);
    let (base_name, extension) = split_extension(file_name);

    FileComponents {
        directory: directory.to_owned(),
        base_name: base_name.to_owned(),
        extension: extension.to_owned(),
    }
}

fn split_directory(filepath: &str) -> (&str, &str) {
    let Some(idx) = filepath.rfind(is_separator) else {
        return ("", filepath);
    };
    // Separators are ASCII, so `idx + 1` is a char boundary.
    let (head, tail) = filepath.split_at(idx + 1);
    let trimmed = head.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        (head, tail)
    } else {
        (trimmed, tail)
    }
}

fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        // Leading dots belong to the stem, so the dot must follow some other char.
        Some(dot) if file_name[..dot].chars().any(|c| c != '.') => file_name.split_at(dot),
        _ => (file_name, ""),
    }
}
