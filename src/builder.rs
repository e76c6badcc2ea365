use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{SearchConfig, Terms};
use crate::engine::{prepare, run};
use crate::error::{BoxError, SiftError};
use crate::results::Results;
use crate::traits::{FnFilter, PathFilter, TryFnFilter};

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a search.
///
/// Created via [`filesift::search()`](crate::search). Every string criterion
/// accepts a single value or a sequence, and repeated calls append. Call
/// [`run()`](SearchBuilder::run) to execute.
///
/// # Example
///
/// ```rust,no_run
/// let results = filesift::search()
///     .include_directory("/path/to/start")
///     .include_start("mydata")
///     .include_extension([".py", ".txt"])
///     .exclude_subdirectory("nohere")
///     .run()?;
///
/// for path in &results.paths {
///     println!("{}", path.display());
/// }
/// # Ok::<(), filesift::SiftError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchBuilder {
    config: SearchConfig,
}

impl From<SearchConfig> for SearchBuilder {
    fn from(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl SearchBuilder {
    /// The configuration built so far.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Consume the builder, keeping only its configuration.
    pub fn into_config(self) -> SearchConfig {
        self.config
    }

    // ── Roots ─────────────────────────────────────────────────────────────

    /// Add a root directory. Without any, the current directory is searched.
    ///
    /// Including a directory and one of its descendants searches the
    /// descendant twice and reports its files twice.
    pub fn include_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.include_directories.push(dir.into());
        self
    }

    /// Add several root directories.
    pub fn include_directories<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config
            .include_directories
            .extend(dirs.into_iter().map(Into::into));
        self
    }

    // ── Include ───────────────────────────────────────────────────────────

    /// Keep files whose base name matches at least one regular expression,
    /// anchored at the start of the name.
    pub fn include_pattern(mut self, terms: impl Into<Terms>) -> Self {
        extend(&mut self.config.include.pattern, terms);
        self
    }

    /// Keep files whose base name starts with at least one of `terms`.
    pub fn include_start(mut self, terms: impl Into<Terms>) -> Self {
        extend(&mut self.config.include.start, terms);
        self
    }

    /// Keep files whose base name contains at least one of `terms`.
    pub fn include_content(mut self, terms: impl Into<Terms>) -> Self {
        extend(&mut self.config.include.content, terms);
        self
    }

    /// Keep files whose base name ends with at least one of `terms`.
    pub fn include_end(mut self, terms: impl Into<Terms>) -> Self {
        extend(&mut self.config.include.end, terms);
        self
    }

    /// Keep files whose extension is one of `terms`. Extensions carry
    /// their dot: `".txt"`, not `"txt"`.
    pub fn include_extension(mut self, terms: impl Into<Terms>) -> Self {
        extend(&mut self.config.include.extension, terms);
        self
    }

    /// Keep files whose full path satisfies `f`. Replaces any earlier
    /// include filter.
    pub fn include_filter<F>(self, f: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.with_include_filter(FnFilter(f))
    }

    /// Like [`include_filter`](Self::include_filter), but `f` may fail.
    /// An error aborts the search.
    pub fn try_include_filter<F, E>(self, f: F) -> Self
    where
        F: Fn(&Path) -> Result<bool, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.with_include_filter(TryFnFilter(move |p: &Path| -> Result<bool, BoxError> {
            f(p).map_err(Into::into)
        }))
    }

    /// Set a custom include filter.
    pub fn with_include_filter(mut self, f: impl PathFilter + 'static) -> Self {
        self.config.include.filter = Some(Arc::new(f));
        self
    }

    // ── Exclude ───────────────────────────────────────────────────────────

    /// Skip every directory whose path contains one of `fragments`, along
    /// with everything under it.
    ///
    /// This is a plain substring test on the whole path: `"sub"` also prunes
    /// `subdirectory/`, and a root whose own path contains `"sub"` yields
    /// nothing.
    pub fn exclude_subdirectory(mut self, fragments: impl Into<Terms>) -> Self {
        extend(&mut self.config.exclude_subdirectories, fragments);
        self
    }

    /// Drop files whose base name matches any regular expression,
    /// anchored at the start of the name.
    pub fn exclude_pattern(mut self, terms: impl Into<Terms>) -> Self {
        extend(&mut self.config.exclude.pattern, terms);
        self
    }

    /// Drop files whose base name starts with any of `terms`.
    pub fn exclude_start(mut self, terms: impl Into<Terms>) -> Self {
        extend(&mut self.config.exclude.start, terms);
        self
    }

    /// Drop files whose base name contains any of `terms`.
    pub fn exclude_content(mut self, terms: impl Into<Terms>) -> Self {
        extend(&mut self.config.exclude.content, terms);
        self
    }

    /// Drop files whose base name ends with any of `terms`.
    pub fn exclude_end(mut self, terms: impl Into<Terms>) -> Self {
        extend(&mut self.config.exclude.end, terms);
        self
    }

    /// Drop files whose extension, dot included, is one of `terms`.
    pub fn exclude_extension(mut self, terms: impl Into<Terms>) -> Self {
        extend(&mut self.config.exclude.extension, terms);
        self
    }

    /// Drop files whose full path satisfies `f`. Replaces any earlier
    /// exclude filter.
    pub fn exclude_filter<F>(self, f: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.with_exclude_filter(FnFilter(f))
    }

    /// Like [`exclude_filter`](Self::exclude_filter), but `f` may fail.
    /// An error aborts the search.
    pub fn try_exclude_filter<F, E>(self, f: F) -> Self
    where
        F: Fn(&Path) -> Result<bool, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.with_exclude_filter(TryFnFilter(move |p: &Path| -> Result<bool, BoxError> {
            f(p).map_err(Into::into)
        }))
    }

    /// Set a custom exclude filter.
    pub fn with_exclude_filter(mut self, f: impl PathFilter + 'static) -> Self {
        self.config.exclude.filter = Some(Arc::new(f));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Collect recoverable walk errors into [`Results::errors`].
    ///
    /// Disabled by default; unreadable directories are then skipped silently.
    pub fn collect_errors(mut self, yes: bool) -> Self {
        self.config.collect_errors = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the search and return results.
    ///
    /// Blocks until the walk of every root completes.
    ///
    /// # Errors
    ///
    /// - [`SiftError::InvalidPattern`] if a regular expression does not
    ///   compile. Checked before any filesystem access.
    /// - [`SiftError::NotFound`] if a root is missing or not a directory.
    ///   Checked before traversal begins.
    /// - [`SiftError::Filter`] if a custom filter fails.
    ///
    /// None of these return partial results.
    pub fn run(self) -> Result<Results, SiftError> {
        let opts = prepare(&self.config)?;
        run(opts)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn extend(target: &mut Vec<String>, terms: impl Into<Terms>) {
    target.extend(terms.into().into_vec());
}
