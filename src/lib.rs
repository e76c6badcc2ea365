//! # filesift
//!
//! Find files in a directory tree by composing include and exclude criteria
//! on the file name, extension, and path.
//!
//! A file is returned when it satisfies every include criterion and none of
//! the exclude criteria, and no directory above it was pruned. String
//! criteria test the *base name*: the last path segment without its
//! extension. Extensions are compared with their dot (`".txt"`).
//!
//! | criterion   | include (all groups must hold) | exclude (any term drops) |
//! |-------------|--------------------------------|--------------------------|
//! | `pattern`   | regex matches at name start     | same                     |
//! | `start`     | name starts with a term         | same                     |
//! | `content`   | name contains a term            | same                     |
//! | `end`       | name ends with a term           | same                     |
//! | `extension` | extension equals a term         | same                     |
//! | `filter`    | custom predicate on full path   | same                     |
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(dir.path().join("report_jan.txt"), "").unwrap();
//! fs::write(dir.path().join("report_final.txt"), "").unwrap();
//! fs::write(dir.path().join("notes.md"), "").unwrap();
//!
//! let results = filesift::search()
//!     .include_directory(dir.path())
//!     .include_start("report")
//!     .exclude_end("_final")
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(results.paths.len(), 1);
//! assert!(results.paths[0].ends_with("report_jan.txt"));
//! ```
//!
//! The same search as a plain configuration struct:
//!
//! ```rust,no_run
//! use filesift::{search_files, Criteria, SearchConfig};
//!
//! let config = SearchConfig {
//!     include: Criteria {
//!         extension: vec![".py".into()],
//!         ..Criteria::default()
//!     },
//!     exclude_subdirectories: vec!["target".into()],
//!     ..SearchConfig::default()
//! };
//!
//! let paths = search_files(&config)?;
//! # Ok::<(), filesift::SiftError>(())
//! ```
//!
//! # Custom filters
//!
//! Both criteria sets take one predicate over the full path, either a closure
//! or any [`PathFilter`]:
//!
//! ```rust,no_run
//! let results = filesift::search()
//!     .include_extension(".log")
//!     .exclude_filter(|path| {
//!         std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true)
//!     })
//!     .run()?;
//! # Ok::<(), filesift::SiftError>(())
//! ```

#![forbid(unsafe_code)]

mod builder;
mod candidate;
mod components;
mod config;
mod criteria;
mod engine;
mod error;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use components::{extract_file_components, FileComponents};
pub use config::{Criteria, SearchConfig, Terms};
pub use error::{BoxError, SiftError};
pub use results::{Results, ScanStats};
pub use traits::PathFilter;

use std::path::PathBuf;

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] to configure and run a search.
pub fn search() -> SearchBuilder {
    SearchBuilder::default()
}

/// Run a search described by `config` and return the matching paths.
///
/// Paths are absolute and come in traversal order, roots in declaration
/// order. Equivalent to `SearchBuilder::from(config.clone()).run()` without
/// the statistics.
///
/// # Errors
///
/// See [`SearchBuilder::run`].
pub fn search_files(config: &SearchConfig) -> Result<Vec<PathBuf>, SiftError> {
    let opts = engine::prepare(config)?;
    Ok(engine::run(opts)?.paths)
}
