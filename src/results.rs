use std::path::PathBuf;
use std::time::Duration;

use crate::error::SiftError;

/// The output of a completed search.
#[derive(Debug)]
pub struct Results {
    /// Absolute paths of matching files, in traversal order, roots in the
    /// order they were declared. Overlapping roots can list a file twice.
    pub paths: Vec<PathBuf>,

    /// Scan statistics.
    pub stats: ScanStats,

    /// Recoverable errors hit during the walk (permission denied, etc.).
    /// Only populated if `.collect_errors(true)` was set on the builder.
    pub errors: Vec<SiftError>,
}

impl Results {
    /// Number of matching files.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Statistics for a completed scan.
#[derive(Debug, Clone)]
pub struct ScanStats {
    /// Files visited, matched or not. Files inside pruned directories are not counted.
    pub files: usize,

    /// Directories visited, roots included.
    pub dirs: usize,

    /// Directories skipped because their path contained an excluded fragment.
    pub pruned: usize,

    /// Wall-clock time from search start to completion.
    pub duration: Duration,

    /// `(files + dirs) / duration.as_secs_f64()`, 0 on zero-duration runs.
    pub entries_per_sec: usize,
}

impl ScanStats {
    pub(crate) fn compute(files: usize, dirs: usize, pruned: usize, duration: Duration) -> Self {
        let total = files + dirs;
        let eps = if duration.as_secs_f64() > 0.0 {
            (total as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            files,
            dirs,
            pruned,
            duration,
            entries_per_sec: eps,
        }
    }
}
