use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create directory '{path}': {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("short write to '{path}': expected {expected} bytes, got {written}")]
    ShortWrite {
        path: PathBuf,
        expected: u64,
        written: u64,
    },

    #[error("failed to move '{from}' to '{to}': {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
