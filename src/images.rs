//! Filesystem handling for the image output directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{Error, Result};

/// Creates `dir` (and any missing parents) unless it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    info!("Creating image directory {:?}", dir);
    fs::create_dir_all(dir).map_err(|e| Error::io("creating directory", dir, e))
}

/// Moves `src` into `dir`, keeping its file name.
///
/// The original is removed only once the copy has landed.
pub fn relocate(src: &Path, dir: &Path) -> Result<PathBuf> {
    let name = src
        .file_name()
        .ok_or_else(|| Error::NoFileName(src.to_path_buf()))?;
    let dest = dir.join(name);
    debug!("copying {:?} -> {:?}", src, dest);
    fs::copy(src, &dest).map_err(|e| Error::io("copying", src, e))?;
    fs::remove_file(src).map_err(|e| Error::io("removing", src, e))?;
    Ok(dest)
}

pub fn rename_rendered(rendered: &Path, final_path: &Path) -> Result<()> {
    if !rendered.exists() {
        return Err(Error::MissingOutput(rendered.to_path_buf()));
    }
    if rendered == final_path {
        return Ok(());
    }
    debug!("renaming {:?} -> {:?}", rendered, final_path);
    fs::rename(rendered, final_path).map_err(|e| Error::io("renaming", rendered, e))
}

/// Deletes every regular file in `dir` whose extension is `extension`,
/// returning how many were removed.
pub fn remove_leftovers(dir: &Path, extension: &str) -> Result<usize> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io("reading directory", dir, e))?;
    let mut removed = 0;
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!("skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };
        if !path.is_file() || path.extension().map_or(true, |ext| ext != extension) {
            continue;
        }
        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => warn!("could not remove {:?}: {}", path, e),
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out/images");
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
        // Second call is a no-op
        ensure_dir(&dir).unwrap();
    }

    #[test]
    fn relocate_moves_file() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("dag.F-1.dot");
        fs::write(&src, "digraph {}").unwrap();
        let dir = tmp.path().join("images");
        fs::create_dir(&dir).unwrap();

        let dest = relocate(&src, &dir).unwrap();
        assert_eq!(dest, dir.join("dag.F-1.dot"));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "digraph {}");
        assert!(!src.exists());
    }

    #[test]
    fn failed_copy_keeps_original() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("dag.F-1.dot");
        fs::write(&src, "digraph {}").unwrap();

        let err = relocate(&src, &tmp.path().join("missing-dir")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(src.exists());
    }

    #[test]
    fn relocate_needs_a_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let err = relocate(&tmp.path().join(".."), tmp.path()).unwrap_err();
        assert!(matches!(err, Error::NoFileName(_)));
    }

    #[test]
    fn rename_onto_itself_keeps_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("dag.plain.dot.png");
        fs::write(&path, "img").unwrap();
        rename_rendered(&path, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "img");
    }

    #[test]
    fn rename_requires_source() {
        let tmp = tempfile::tempdir().unwrap();
        let err = rename_rendered(&tmp.path().join("a.png"), &tmp.path().join("b.png"))
            .unwrap_err();
        assert!(matches!(err, Error::MissingOutput(_)));
    }

    #[test]
    fn rename_replaces_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("dag.F-1.dot.png");
        let to = tmp.path().join("dag.F.png");
        fs::write(&from, "new").unwrap();
        fs::write(&to, "old").unwrap();
        rename_rendered(&from, &to).unwrap();
        assert_eq!(fs::read_to_string(&to).unwrap(), "new");
        assert!(!from.exists());
    }

    #[test]
    fn leftovers_only_match_extension() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["a.dot", "b.dot", "a.png", "dot"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        fs::create_dir(tmp.path().join("nested.dot")).unwrap();

        assert_eq!(remove_leftovers(tmp.path(), "dot").unwrap(), 2);
        assert!(tmp.path().join("a.png").exists());
        assert!(tmp.path().join("dot").exists());
        assert!(tmp.path().join("nested.dot").is_dir());
        assert!(!tmp.path().join("a.dot").exists());
    }
}
