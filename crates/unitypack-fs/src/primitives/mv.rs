use crate::{Error, Result, ensure_parent};
use std::path::Path;

/// Move a file to `to`, creating missing parent directories first.
///
/// An existing file at `to` is replaced. When the rename crosses devices the
/// file is copied and the source removed.
pub fn move_file(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<()> {
    let from = from.as_ref();
    let to = to.as_ref();

    ensure_parent(to)?;

    let move_err = |e: std::io::Error| Error::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    };

    match std::fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e)
            if e.raw_os_error() == Some(18) || e.kind() == std::io::ErrorKind::CrossesDevices =>
        {
            std::fs::copy(from, to).map_err(move_err)?;
            std::fs::remove_file(from).map_err(move_err)
        }
        Err(e) => Err(move_err(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn moves_into_new_directories() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("x/y/dest.txt");
        std::fs::write(&src, "data").unwrap();

        move_file(&src, &dest).unwrap();

        assert!(!src.exists());
        assert_eq!(std::fs::read(&dest).unwrap(), b"data");
    }

    #[test]
    fn replaces_existing_target() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        std::fs::write(&src, "new").unwrap();
        std::fs::write(&dest, "old").unwrap();

        move_file(&src, &dest).unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"new");
    }

    #[test]
    fn missing_source_is_a_move_error() {
        let dir = tempdir().unwrap();
        let err = move_file(dir.path().join("nope"), dir.path().join("dest")).unwrap_err();
        assert!(matches!(err, Error::Move { .. }));
    }
}
