use std::path::Path;

use filesift::{extract_file_components, FileComponents};

fn parts(p: &str) -> (String, String, String) {
    extract_file_components(p).into_parts()
}

fn triple(d: &str, b: &str, e: &str) -> (String, String, String) {
    (d.into(), b.into(), e.into())
}

#[test]
fn splits_directory_name_and_extension() {
    assert_eq!(parts("/my/super/path/name.txt"), triple("/my/super/path", "name", ".txt"));
    assert_eq!(parts("relative/dir/archive.tar.gz"), triple("relative/dir", "archive.tar", ".gz"));
}

#[test]
fn no_directory() {
    assert_eq!(parts("name.txt"), triple("", "name", ".txt"));
}

#[test]
fn no_extension() {
    assert_eq!(parts("/my/super/path/name"), triple("/my/super/path", "name", ""));
    assert_eq!(parts("Makefile"), triple("", "Makefile", ""));
}

#[test]
fn leading_dots_are_not_an_extension() {
    assert_eq!(parts("/home/user/.bashrc"), triple("/home/user", ".bashrc", ""));
    assert_eq!(parts("..hidden"), triple("", "..hidden", ""));
    assert_eq!(parts(".config.toml"), triple("", ".config", ".toml"));
}

#[test]
fn trailing_dot_is_the_extension() {
    assert_eq!(parts("dir/name."), triple("dir", "name", "."));
}

#[test]
fn dot_in_directory_is_ignored() {
    assert_eq!(parts("some.dir/name"), triple("some.dir", "name", ""));
}

#[test]
fn root_directory_is_kept() {
    assert_eq!(parts("/name.txt"), triple("/", "name", ".txt"));
}

#[test]
fn repeated_separators_are_trimmed() {
    assert_eq!(parts("a//b.txt"), triple("a", "b", ".txt"));
}

#[test]
fn trailing_separator_means_empty_name() {
    assert_eq!(parts("a/b/"), triple("a/b", "", ""));
}

#[test]
fn empty_input() {
    assert_eq!(extract_file_components(""), FileComponents::default());
}

#[test]
fn file_name_rejoins_base_and_extension() {
    let c = extract_file_components("dir/report_final.txt");
    assert_eq!(c.file_name(), "report_final.txt");
}

#[test]
fn components_rejoin_to_equivalent_path() {
    for p in [
        "/my/super/path/name.txt",
        "a/b/c",
        "/name.txt",
        "a//b.txt",
        "x/.bashrc",
        "x/archive.tar.gz",
    ] {
        let c = extract_file_components(p);
        let rejoined = Path::new(&c.directory).join(c.file_name());
        assert_eq!(rejoined, Path::new(p), "round trip of {p}");
    }
}

#[test]
fn from_path_accepts_unicode() {
    let c = FileComponents::from_path(Path::new("données/été.csv")).unwrap();
    assert_eq!(c.into_parts(), triple("données", "été", ".csv"));
}

#[cfg(unix)]
#[test]
fn from_path_rejects_non_unicode() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let path = Path::new(OsStr::from_bytes(b"dir/bad\xff.txt"));
    let err = FileComponents::from_path(path).unwrap_err();
    assert!(matches!(err, filesift::SiftError::InvalidPath(_)));
}
