use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::traits::PathFilter;

// ---------------------------------------------------------------------------
// Terms
// ---------------------------------------------------------------------------

/// One or more strings given to a single criterion.
///
/// Lets every string criterion accept either a lone value or a sequence:
/// `".py"`, `vec![".py", ".txt"]`, `[".py", ".txt"]` and `&names[..]` all
/// convert. An empty `Terms` places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Terms(Vec<String>);

impl Terms {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Terms {
    fn from(s: &str) -> Self {
        Self(vec![s.to_owned()])
    }
}

impl From<String> for Terms {
    fn from(s: String) -> Self {
        Self(vec![s])
    }
}

impl<S: Into<String>> From<Vec<S>> for Terms {
    fn from(v: Vec<S>) -> Self {
        Self(v.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String> + Clone> From<&[S]> for Terms {
    fn from(v: &[S]) -> Self {
        Self(v.iter().cloned().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Terms {
    fn from(v: [S; N]) -> Self {
        Self(v.into_iter().map(Into::into).collect())
    }
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// The six predicate groups applied to every candidate file.
///
/// String groups test the file's base name (no directory, no extension),
/// except `extension`, which is compared exactly against the extension with
/// its leading dot (`".txt"`). `filter` receives the full path.
///
/// Used for inclusion, every non-empty group must be satisfied by at least one
/// of its terms. Used for exclusion, a single satisfied term in any group is
/// enough.
#[derive(Clone, Default)]
pub struct Criteria {
    /// Regular expressions that must match at the start of the base name.
    pub pattern:   Vec<String>,
    /// Base-name prefixes.
    pub start:     Vec<String>,
    /// Base-name substrings.
    pub content:   Vec<String>,
    /// Base-name suffixes.
    pub end:       Vec<String>,
    /// Exact extensions, dot included.
    pub extension: Vec<String>,
    /// Custom predicate over the full path.
    pub filter:    Option<Arc<dyn PathFilter>>,
}

impl Criteria {
    /// `true` if no group carries a constraint.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
            && self.start.is_empty()
            && self.content.is_empty()
            && self.end.is_empty()
            && self.extension.is_empty()
            && self.filter.is_none()
    }
}

impl fmt::Debug for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criteria")
            .field("pattern", &self.pattern)
            .field("start", &self.start)
            .field("content", &self.content)
            .field("end", &self.end)
            .field("extension", &self.extension)
            .field("filter", &self.filter.as_ref().map(|_| "<filter>"))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// SearchConfig
// ---------------------------------------------------------------------------

/// Everything a search needs. `Default` means: search the current working
/// directory, keep every file.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Root directories, searched in order. Empty means the current directory.
    pub include_directories:    Vec<PathBuf>,

    /// A file must satisfy all of these.
    pub include:                Criteria,

    /// A file satisfying any of these is dropped, even if included.
    pub exclude:                Criteria,

    /// Directories whose path contains any of these fragments are skipped
    /// along with everything under them. Matching is by substring, so `"sub"`
    /// also prunes `subdirectory/` and `my_sub/`.
    pub exclude_subdirectories: Vec<String>,

    /// Keep recoverable walk errors in [`Results::errors`](crate::Results::errors).
    pub collect_errors:         bool,
}
