use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use once_cell::sync::Lazy;
use unitypack_archive::Progress;

pub trait TrackerBuilder<T: Tracker> {
    fn build(self) -> T;
}

pub trait Tracker {
    fn step(&self, progress: &Progress) -> &Self;
    fn finish_with(self, msg: String);
    fn abandon(self);
}

const SPINNER_STYLE: &str = "{spinner:.blue} {prefix:>12.cyan.bold} [{elapsed_precise}] {wide_msg}";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

static SPINNER_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    ProgressStyle::with_template(SPINNER_STYLE)
        .ok()
        .map(|style| style.tick_chars(TICK))
});

/// Spinner on stdout naming the file currently being written.
pub struct ProgressTracker {
    pb: ProgressBar,
}

impl ProgressTracker {
    /// Progress callback for `ExtractOptions::on_progress`.
    pub fn callback(&self) -> Arc<dyn Fn(Progress) + Send + Sync> {
        let tracker = Self {
            pb: self.pb.clone(),
        };
        Arc::new(move |progress: Progress| {
            tracker.step(&progress);
        })
    }
}

impl Tracker for ProgressTracker {
    fn step(&self, progress: &Progress) -> &Self {
        if let Some(file) = &progress.current_file {
            self.pb.set_message(format!("Writing {}", file.display()));
        }
        self.pb.set_position(progress.entries_processed as u64);
        self
    }

    fn finish_with(self, msg: String) {
        self.pb.finish_with_message(msg);
    }

    fn abandon(self) {
        self.pb.abandon();
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProgressTrackerBuilder {
    prefix: Option<String>,
    hidden: bool,
}

impl ProgressTrackerBuilder {
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

impl TrackerBuilder<ProgressTracker> for ProgressTrackerBuilder {
    fn build(self) -> ProgressTracker {
        if self.hidden {
            return ProgressTracker {
                pb: ProgressBar::hidden(),
            };
        }

        let mut pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        if let Some(style) = SPINNER_TEMPLATE.as_ref() {
            pb = pb.with_style(style.clone());
        }
        if let Some(prefix) = self.prefix {
            pb = pb.with_prefix(prefix);
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        ProgressTracker { pb }
    }
}
