//! Filesystem helpers built on `cap-std` and `camino`.
//!
//! Paths given on the command line are resolved with ambient authority; the
//! helpers split absolute paths into a root directory handle plus a relative
//! remainder so `cap-std` can operate beneath it.

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path for reading.
///
/// # Errors
///
/// Returns the underlying I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open the directory containing `path` and return it with the file name.
///
/// The parent is opened with ambient authority, so `..` components resolve
/// against the real filesystem.
///
/// # Errors
///
/// Returns the underlying I/O error when the parent cannot be opened or
/// `path` has no file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Whether `path` exists and is a regular file.
///
/// # Errors
///
/// Returns the underlying I/O error when the parent directory cannot be
/// opened or the entry cannot be inspected.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create every missing directory above `path`.
///
/// # Errors
///
/// Returns the underlying I/O error when a directory cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) else {
        return Ok(());
    };
    let (base, relative) = split_anchor(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    dir.create_dir_all(&relative)
}

/// Split a path into its anchor and the remainder to create beneath it.
///
/// The anchor is the root for absolute paths, otherwise `.` followed by any
/// leading `..` components so the remainder never climbs out of it.
fn split_anchor(path: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut base = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => base.push(component.as_str()),
            Utf8Component::ParentDir | Utf8Component::CurDir
                if relative.as_str().is_empty() =>
            {
                base.push(component.as_str());
            }
            other => relative.push(other.as_str()),
        }
    }
    if base.as_str().is_empty() {
        base.push(".");
    }
    (base, relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir")
    }

    /// Express `target` relative to the working directory by climbing to the
    /// filesystem root with `..` first.
    fn climbing_path(target: &Utf8Path) -> Utf8PathBuf {
        let cwd = std::env::current_dir().expect("working directory");
        let mut path = Utf8PathBuf::new();
        for _ in cwd.components().skip(1) {
            path.push("..");
        }
        for component in target.components().skip(1) {
            path.push(component.as_str());
        }
        path
    }

    #[rstest]
    #[case("data/pilgrim.db", ".", "data")]
    #[case("pilgrim.db", ".", "pilgrim.db")]
    #[case("../state/pilgrim.db", "..", "state/pilgrim.db")]
    #[case("../../pilgrim.db", "../..", "pilgrim.db")]
    fn splits_relative_paths(#[case] raw: &str, #[case] base: &str, #[case] relative: &str) {
        let (found_base, found_relative) = split_anchor(Utf8Path::new(raw));
        assert_eq!(found_base, Utf8PathBuf::from(base));
        assert_eq!(found_relative, Utf8PathBuf::from(relative));
    }

    #[cfg(unix)]
    #[rstest]
    fn splits_absolute_paths() {
        let (base, relative) = split_anchor(Utf8Path::new("/var/lib/pilgrim"));
        assert_eq!(base, Utf8PathBuf::from("/"));
        assert_eq!(relative, Utf8PathBuf::from("var/lib/pilgrim"));
    }

    #[rstest]
    fn creates_nested_parent_directories() {
        let dir = TempDir::new().expect("tempdir");
        let target = utf8_root(&dir).join("a/b/pilgrim.db");
        ensure_parent_dir(&target).expect("create parents");
        assert!(dir.path().join("a/b").is_dir());
    }

    #[rstest]
    fn reports_files_and_directories() {
        let dir = TempDir::new().expect("tempdir");
        let root = utf8_root(&dir);
        let file = root.join("sites.json");
        std::fs::write(&file, b"[]").expect("write file");
        assert!(file_is_file(&file).expect("inspect file"));
        assert!(!file_is_file(&root.join("missing.json")).is_ok_and(|found| found));
    }

    #[cfg(unix)]
    #[rstest]
    fn inspects_files_reached_through_parent_components() {
        let dir = TempDir::new().expect("tempdir");
        let file = utf8_root(&dir).join("request.json");
        std::fs::write(&file, b"{}").expect("write file");
        let climbing = climbing_path(&file);
        assert!(climbing.as_str().starts_with(".."));

        assert!(file_is_file(&climbing).expect("inspect file"));
        assert!(!file_is_file(&climbing_path(&utf8_root(&dir))).expect("inspect dir"));
    }

    #[cfg(unix)]
    #[rstest]
    fn creates_parents_reached_through_parent_components() {
        let dir = TempDir::new().expect("tempdir");
        let target = climbing_path(&utf8_root(&dir).join("state/nested/pilgrim.db"));

        ensure_parent_dir(&target).expect("create parents");

        assert!(dir.path().join("state/nested").is_dir());
    }
}
