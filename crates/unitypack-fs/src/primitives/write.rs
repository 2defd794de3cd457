use crate::{Error, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Create or truncate `path` and copy exactly `size` bytes from `reader` into it.
///
/// Fewer than `size` bytes is reported as [`Error::ShortWrite`]; the partial
/// file is left on disk.
pub fn write_exact<R: Read>(path: impl AsRef<Path>, reader: R, size: u64) -> Result<u64> {
    let path = path.as_ref();

    let mut file = File::create(path).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    let written = io::copy(&mut reader.take(size), &mut file).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    if written != size {
        return Err(Error::ShortWrite {
            path: path.to_path_buf(),
            expected: size,
            written,
        });
    }

    Ok(written)
}
