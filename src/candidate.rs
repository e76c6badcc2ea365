use std::path::Path;

use crate::components::{extract_file_components, FileComponents};

/// A single file produced during traversal, decomposed once so every
/// string criterion can read its base name and extension.
pub(crate) struct Candidate<'a> {
    /// Full path to the file, absolute.
    pub path: &'a Path,

    /// `path` split into directory, base name, and extension.
    /// Non-unicode segments are replaced lossily.
    pub components: FileComponents,
}

impl<'a> Candidate<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self {
            path,
            components: extract_file_components(&path.to_string_lossy()),
        }
    }

    pub fn base_name(&self) -> &str {
        &self.components.base_name
    }

    pub fn extension(&self) -> &str {
        &self.components.extension
    }
}
