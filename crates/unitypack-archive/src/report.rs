use std::path::PathBuf;

use crate::entry::EntryKind;

/// A file that reached its final, path-name-derived location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedAsset {
    pub identifier: String,
    pub kind: EntryKind,
    /// Location relative to the output root.
    pub path: PathBuf,
    pub size: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ExtractReport {
    pub entries_seen: usize,
    pub skipped: usize,
    pub bytes_written: u64,
    pub assets: Vec<ExtractedAsset>,
    /// Placeholder files whose identifier never received a path name.
    pub unresolved: Vec<PathBuf>,
}

impl ExtractReport {
    pub fn asset_count(&self) -> usize {
        self.assets
            .iter()
            .filter(|a| a.kind == EntryKind::Content)
            .count()
    }

    pub fn meta_count(&self) -> usize {
        self.assets
            .iter()
            .filter(|a| a.kind == EntryKind::MetaContent)
            .count()
    }
}
