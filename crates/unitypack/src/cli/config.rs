use std::path::{Path, PathBuf};

use super::App;

/// Settings for one unpack run, resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnpackConfig {
    pub archive: PathBuf,
    pub output: PathBuf,
    pub include_meta: bool,
    pub show_progress: bool,
}

impl From<&App> for UnpackConfig {
    fn from(app: &App) -> Self {
        let output = app
            .output
            .clone()
            .unwrap_or_else(|| default_output_dir(&app.archive));

        Self {
            archive: app.archive.clone(),
            output,
            include_meta: !app.nometa,
            show_progress: !app.quiet,
        }
    }
}

/// The archive's file name without its last extension, relative to the
/// working directory. Names without an extension extract into `.`.
pub fn default_output_dir(archive: &Path) -> PathBuf {
    match (archive.file_stem(), archive.extension()) {
        (Some(stem), Some(_)) => PathBuf::from(stem),
        _ => PathBuf::from("."),
    }
}
