use anyhow::Context;
use unitypack_archive::{ExtractOptions, extract_file};

use super::App;
use super::config::UnpackConfig;
use crate::ui::tracker::{ProgressTrackerBuilder, Tracker, TrackerBuilder};

pub fn run(app: &App) -> anyhow::Result<()> {
    let config = UnpackConfig::from(app);

    let tracker = ProgressTrackerBuilder::default()
        .with_prefix("Extracting")
        .hidden(!config.show_progress)
        .build();

    let options = ExtractOptions::default()
        .include_meta(config.include_meta)
        .on_progress(tracker.callback());

    let report = match extract_file(&config.archive, &config.output, &options) {
        Ok(report) => report,
        Err(e) => {
            tracker.abandon();
            return Err(e).with_context(|| {
                format!("failed to extract '{}'", config.archive.display())
            });
        }
    };

    tracker.finish_with(format!(
        "Extracted {} assets ({} meta) into {}",
        report.asset_count(),
        report.meta_count(),
        config.output.display()
    ));

    Ok(())
}
