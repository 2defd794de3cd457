use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct ExtractOptions {
    /// Write `.meta` sidecar files next to their assets.
    pub include_meta: bool,
    pub on_progress: Option<Arc<dyn Fn(Progress) + Send + Sync>>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_meta: true,
            on_progress: None,
        }
    }
}

impl ExtractOptions {
    pub fn include_meta(mut self, include: bool) -> Self {
        self.include_meta = include;
        self
    }

    pub fn on_progress(mut self, callback: Arc<dyn Fn(Progress) + Send + Sync>) -> Self {
        self.on_progress = Some(callback);
        self
    }
}

#[derive(Clone, Debug)]
pub struct Progress {
    pub entries_processed: usize,
    pub bytes_written: u64,
    /// Path of the file just written or resolved, relative to the output root.
    pub current_file: Option<PathBuf>,
}
