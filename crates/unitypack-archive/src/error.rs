use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported package format")]
    UnsupportedFormat,

    #[error("invalid package: {source}")]
    Corrupted { source: io::Error },

    #[error("error opening '{path}': {source}")]
    Input { path: PathBuf, source: io::Error },

    #[error("cannot create output directory: {source}")]
    OutputDir { source: unitypack_fs::Error },

    #[error("error extracting '{identifier}': {source}")]
    Write {
        identifier: String,
        source: unitypack_fs::Error,
    },

    #[error("error renaming '{identifier}': {source}")]
    Rename {
        identifier: String,
        source: unitypack_fs::Error,
    },

    #[error("invalid path name for '{identifier}': {reason}")]
    InvalidPathName { identifier: String, reason: String },

    #[error("path name '{path}' for '{identifier}' escapes the output directory")]
    PathEscape { identifier: String, path: String },
}

impl Error {
    pub(crate) fn corrupted(source: io::Error) -> Self {
        Self::Corrupted { source }
    }

    /// Whether the package itself is unreadable, as opposed to a filesystem failure.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat
                | Self::Corrupted { .. }
                | Self::InvalidPathName { .. }
                | Self::PathEscape { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
