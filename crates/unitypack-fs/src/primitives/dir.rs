use crate::{Error, Result};
use std::path::Path;

/// Create `path` and all missing parents. An existing directory is not an error.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match std::fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(Error::CreateDir {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Create the parent directory of `path`, if it has one.
pub fn ensure_parent(path: impl AsRef<Path>) -> Result<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_dir_creates_nested() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_dir_tolerates_existing() {
        let dir = tempdir().unwrap();
        ensure_dir(dir.path()).unwrap();
        ensure_dir(dir.path()).unwrap();
    }

    #[test]
    fn ensure_dir_fails_over_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file");
        std::fs::write(&file, "data").unwrap();

        let err = ensure_dir(file.join("sub")).unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
    }

    #[test]
    fn ensure_parent_of_bare_name() {
        ensure_parent("name-only").unwrap();
    }
}
