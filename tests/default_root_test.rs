use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use filesift::search;

// The working directory is process-wide, so this binary holds a single test.
#[test]
fn no_roots_searches_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "").unwrap();
    fs::write(dir.path().join("b.txt"), "").unwrap();
    fs::create_dir(dir.path().join("pkg")).unwrap();
    fs::write(dir.path().join("pkg").join("c.py"), "").unwrap();

    std::env::set_current_dir(dir.path()).unwrap();
    let cwd = std::env::current_dir().unwrap();

    let results = search().include_extension(".py").run().unwrap();

    let found: BTreeSet<PathBuf> = results.paths.into_iter().collect();
    let expected: BTreeSet<PathBuf> = [cwd.join("a.py"), cwd.join("pkg").join("c.py")]
        .into_iter()
        .collect();
    assert_eq!(found, expected);
}
