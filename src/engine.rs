use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, trace};

use crate::candidate::Candidate;
use crate::config::SearchConfig;
use crate::criteria::CompiledCriteria;
use crate::error::SiftError;
use crate::results::{Results, ScanStats};

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// A root as declared and as reported.
///
/// The walk and the pruning test run on `walked`, the path as given. Matches
/// are reported under `absolute`.
pub(crate) struct Root {
    pub walked:   PathBuf,
    pub absolute: PathBuf,
}

/// A validated search: patterns compiled, roots known to exist.
pub(crate) struct EngineOptions {
    pub roots:          Vec<Root>,
    pub include:        CompiledCriteria,
    pub exclude:        CompiledCriteria,
    pub prune:          Arc<Vec<String>>,
    pub collect_errors: bool,
}

// ---------------------------------------------------------------------------
// prepare()
// ---------------------------------------------------------------------------

/// Validate `config` and resolve its roots.
///
/// Pattern errors are raised before the filesystem is touched. Every root is
/// then checked before any traversal starts, so a missing directory never
/// yields partial results.
pub(crate) fn prepare(config: &SearchConfig) -> Result<EngineOptions, SiftError> {
    let include = CompiledCriteria::compile(&config.include)?;
    let exclude = CompiledCriteria::compile(&config.exclude)?;

    let declared = if config.include_directories.is_empty() {
        let cwd = std::env::current_dir().map_err(|source| SiftError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        vec![cwd]
    } else {
        config.include_directories.clone()
    };

    let mut roots = Vec::with_capacity(declared.len());
    for dir in declared {
        if !dir.is_dir() {
            return Err(SiftError::NotFound(dir));
        }
        let absolute = std::path::absolute(&dir).map_err(|source| SiftError::Io {
            path: dir.clone(),
            source,
        })?;
        roots.push(Root { walked: dir, absolute });
    }

    Ok(EngineOptions {
        roots,
        include,
        exclude,
        prune: Arc::new(config.exclude_subdirectories.clone()),
        collect_errors: config.collect_errors,
    })
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Walk every root in order and collect the files that pass both criteria.
///
/// Single-threaded and blocking. The walk is not a snapshot: files created or
/// removed while it runs may or may not be seen.
pub(crate) fn run(opts: EngineOptions) -> Result<Results, SiftError> {
    debug!(
        roots = ?opts.roots.iter().map(|r| &r.walked).collect::<Vec<_>>(),
        prune = ?opts.prune,
        "starting search"
    );

    let pruned = Arc::new(AtomicUsize::new(0));
    let mut files  = 0usize;
    let mut dirs   = 0usize;
    let mut paths  = Vec::<PathBuf>::new();
    let mut errors = Vec::<SiftError>::new();

    let start = Instant::now();

    for root in &opts.roots {
        // The filter below never sees depth 0, so the root is checked here.
        if contains_fragment(&root.walked, &opts.prune) {
            trace!(path = %root.walked.display(), "pruning excluded root");
            pruned.fetch_add(1, Ordering::Relaxed);
            continue;
        }

        let mut builder = WalkBuilder::new(&root.walked);
        builder
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .same_file_system(false);

        let prune   = Arc::clone(&opts.prune);
        let counter = Arc::clone(&pruned);
        builder.filter_entry(move |entry: &DirEntry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if is_dir && contains_fragment(entry.path(), &prune) {
                trace!(path = %entry.path().display(), "pruning excluded subdirectory");
                counter.fetch_add(1, Ordering::Relaxed);
                return false;
            }
            true
        });

        for res in builder.build() {
            let entry = match res {
                Ok(e) => e,
                Err(e) => {
                    let err = map_ignore_error(e);
                    debug!(error = %err, "skipping unreadable entry");
                    if opts.collect_errors {
                        errors.push(err);
                    }
                    continue;
                }
            };

            let ft = match entry.file_type() {
                Some(ft) => ft,
                None     => continue,
            };

            if ft.is_dir() {
                dirs += 1;
                continue;
            }

            // Symlinked directories are listed but never descended.
            if ft.is_symlink() && entry.path().is_dir() {
                dirs += 1;
                continue;
            }

            files += 1;

            let path = match entry.path().strip_prefix(&root.walked) {
                Ok(rel) => root.absolute.join(rel),
                Err(_)  => entry.path().to_path_buf(),
            };

            let candidate = Candidate::new(&path);
            if !opts.include.matches_all(&candidate)? {
                trace!(path = %path.display(), "not included");
                continue;
            }
            if opts.exclude.matches_any(&candidate)? {
                trace!(path = %path.display(), "excluded");
                continue;
            }

            paths.push(path);
        }
    }

    let duration = start.elapsed();
    let pruned   = pruned.load(Ordering::Relaxed);

    debug!(
        matches = paths.len(),
        files,
        dirs,
        pruned,
        elapsed_ms = duration.as_millis() as u64,
        "search complete"
    );

    Ok(Results {
        paths,
        stats: ScanStats::compute(files, dirs, pruned, duration),
        errors,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Substring match on the whole path, not on path segments.
fn contains_fragment(path: &Path, fragments: &[String]) -> bool {
    if fragments.is_empty() {
        return false;
    }
    let path = path.to_string_lossy();
    fragments.iter().any(|f| path.contains(f.as_str()))
}

fn map_ignore_error(e: ignore::Error) -> SiftError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => {
                if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                    SiftError::PermissionDenied(path)
                } else {
                    SiftError::Io { path, source: io_err }
                }
            }
            other => SiftError::Walk(format!("{}: {}", path.display(), other)),
        },
        ignore::Error::WithDepth { err, .. }  => map_ignore_error(*err),
        ignore::Error::Loop { child, .. }     => SiftError::SymlinkLoop(child),
        ignore::Error::Io(io_err)             => SiftError::Io {
            path: PathBuf::new(),
            source: io_err,
        },
        other => SiftError::Walk(other.to_string()),
    }
}
