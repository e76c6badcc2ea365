use std::path::Path;

use crate::error::BoxError;

/// A custom predicate over the full path of a candidate file.
///
/// Implement this when a filter needs state or can fail. For plain closures,
/// prefer the builder's `.include_filter()` / `.exclude_filter()`, or their
/// `try_` variants for closures returning `Result`.
///
/// An `Err` aborts the whole search: it surfaces from
/// [`SearchBuilder::run`](crate::SearchBuilder::run) as
/// [`SiftError::Filter`](crate::SiftError::Filter) and no paths are returned.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use filesift::{BoxError, PathFilter};
///
/// struct MaxLen(usize);
///
/// impl PathFilter for MaxLen {
///     fn check(&self, path: &Path) -> Result<bool, BoxError> {
///         Ok(path.as_os_str().len() <= self.0)
///     }
/// }
/// ```
pub trait PathFilter: Send + Sync {
    /// Returns `true` if `path` satisfies the filter.
    fn check(&self, path: &Path) -> Result<bool, BoxError>;
}

/// Adapts an infallible closure.
pub(crate) struct FnFilter<F>(pub F);

impl<F> PathFilter for FnFilter<F>
where
    F: Fn(&Path) -> bool + Send + Sync,
{
    fn check(&self, path: &Path) -> Result<bool, BoxError> {
        Ok((self.0)(path))
    }
}

/// Adapts a fallible closure whose error is already boxed.
pub(crate) struct TryFnFilter<F>(pub F);

impl<F> PathFilter for TryFnFilter<F>
where
    F: Fn(&Path) -> Result<bool, BoxError> + Send + Sync,
{
    fn check(&self, path: &Path) -> Result<bool, BoxError> {
        (self.0)(path)
    }
}
