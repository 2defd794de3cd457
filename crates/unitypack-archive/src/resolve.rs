use std::collections::HashMap;
use std::ffi::OsString;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::entry::{Entry, EntryKind};
use crate::error::{Error, Result};
use crate::options::{ExtractOptions, Progress};
use crate::report::{ExtractReport, ExtractedAsset};
use crate::sanitize::parse_path_name;

const META_SUFFIX: &str = ".meta";

/// A file already on disk under its identifier, waiting for a path name.
#[derive(Debug)]
struct PendingFile {
    path: PathBuf,
    size: u64,
}

/// Single-pass resolver from identifier-keyed records to a directory tree.
///
/// Content and metadata records are written as soon as they arrive, under
/// their known path if the identifier's `pathname` record has been seen, or
/// under the identifier itself otherwise. Placeholder files are moved into
/// place when the `pathname` record arrives. State lives for one extraction.
pub struct Resolver<'a> {
    output_root: PathBuf,
    options: &'a ExtractOptions,
    known_names: HashMap<String, PathBuf>,
    pending_content: HashMap<String, PendingFile>,
    pending_meta: HashMap<String, PendingFile>,
    report: ExtractReport,
}

impl<'a> Resolver<'a> {
    pub fn new(output_root: impl Into<PathBuf>, options: &'a ExtractOptions) -> Self {
        Self {
            output_root: output_root.into(),
            options,
            known_names: HashMap::new(),
            pending_content: HashMap::new(),
            pending_meta: HashMap::new(),
            report: ExtractReport::default(),
        }
    }

    /// Consume `entries` once, in order, writing the resolved tree.
    ///
    /// The first error aborts the run; files already written stay on disk.
    pub fn extract<I, R>(mut self, entries: I) -> Result<ExtractReport>
    where
        I: IntoIterator<Item = Result<Entry<R>>>,
        R: Read,
    {
        unitypack_fs::ensure_dir(&self.output_root).map_err(|source| Error::OutputDir { source })?;

        for entry in entries {
            self.process(entry?)?;
        }

        Ok(self.finish())
    }

    fn process<R: Read>(&mut self, entry: Entry<R>) -> Result<()> {
        self.report.entries_seen += 1;

        match entry.kind {
            EntryKind::Content => self.write_asset(entry),
            EntryKind::MetaContent if self.options.include_meta => self.write_asset(entry),
            EntryKind::PathName => self.resolve_name(entry),
            EntryKind::MetaContent | EntryKind::Other => {
                self.report.skipped += 1;
                Ok(())
            }
        }
    }

    fn write_asset<R: Read>(&mut self, entry: Entry<R>) -> Result<()> {
        let Entry {
            identifier,
            kind,
            size,
            payload,
        } = entry;
        let is_meta = kind == EntryKind::MetaContent;

        let known = self.known_names.get(&identifier).cloned();
        let base = known
            .clone()
            .unwrap_or_else(|| placeholder_name(&identifier));
        let relative = if is_meta { with_meta_suffix(&base) } else { base };
        let target = self.output_root.join(&relative);

        let write_err = |source: unitypack_fs::Error| Error::Write {
            identifier: identifier.clone(),
            source,
        };

        if known.is_some() {
            unitypack_fs::ensure_parent(&target).map_err(write_err)?;
        }
        let written = unitypack_fs::write_exact(&target, payload, size).map_err(write_err)?;
        self.report.bytes_written += written;

        debug!(
            identifier = %identifier,
            ?kind,
            size,
            path = %relative.display(),
            resolved = known.is_some(),
            "wrote entry"
        );

        if known.is_some() {
            self.report.assets.push(ExtractedAsset {
                identifier,
                kind,
                path: relative.clone(),
                size: written,
            });
        } else {
            let pending = if is_meta {
                &mut self.pending_meta
            } else {
                &mut self.pending_content
            };
            pending.insert(
                identifier,
                PendingFile {
                    path: target,
                    size: written,
                },
            );
        }

        self.emit_progress(relative);
        Ok(())
    }

    fn resolve_name<R: Read>(&mut self, entry: Entry<R>) -> Result<()> {
        let Entry {
            identifier,
            size,
            mut payload,
            ..
        } = entry;

        let mut raw = Vec::new();
        payload
            .by_ref()
            .take(size)
            .read_to_end(&mut raw)
            .map_err(Error::corrupted)?;
        if (raw.len() as u64) < size {
            return Err(Error::corrupted(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("path name record for '{identifier}' is truncated"),
            )));
        }

        let relative = parse_path_name(&identifier, &raw)?;
        debug!(identifier = %identifier, path = %relative.display(), "resolved path name");

        if let Some(previous) = self.known_names.insert(identifier.clone(), relative.clone()) {
            if previous != relative {
                warn!(
                    identifier = %identifier,
                    previous = %previous.display(),
                    current = %relative.display(),
                    "duplicate path name, later entries use the latest"
                );
            }
        }

        if let Some(pending) = self.pending_content.remove(&identifier) {
            self.relocate(&identifier, EntryKind::Content, pending, relative.clone())?;
        }
        if let Some(pending) = self.pending_meta.remove(&identifier) {
            self.relocate(
                &identifier,
                EntryKind::MetaContent,
                pending,
                with_meta_suffix(&relative),
            )?;
        }

        self.emit_progress(relative);
        Ok(())
    }

    fn relocate(
        &mut self,
        identifier: &str,
        kind: EntryKind,
        pending: PendingFile,
        relative: PathBuf,
    ) -> Result<()> {
        let target = self.output_root.join(&relative);
        unitypack_fs::move_file(&pending.path, &target).map_err(|source| Error::Rename {
            identifier: identifier.to_owned(),
            source,
        })?;

        debug!(
            identifier,
            from = %pending.path.display(),
            to = %target.display(),
            "moved placeholder"
        );

        self.report.assets.push(ExtractedAsset {
            identifier: identifier.to_owned(),
            kind,
            path: relative,
            size: pending.size,
        });
        Ok(())
    }

    fn emit_progress(&self, current: PathBuf) {
        if let Some(callback) = &self.options.on_progress {
            callback(Progress {
                entries_processed: self.report.entries_seen,
                bytes_written: self.report.bytes_written,
                current_file: Some(current),
            });
        }
    }

    fn finish(mut self) -> ExtractReport {
        let mut unresolved: Vec<(String, PathBuf)> = self
            .pending_content
            .drain()
            .chain(self.pending_meta.drain())
            .map(|(identifier, pending)| (identifier, pending.path))
            .collect();
        unresolved.sort();

        for (identifier, path) in &unresolved {
            warn!(
                identifier = %identifier,
                path = %path.display(),
                "no path name for entry, left under its identifier"
            );
        }

        let mut report = self.report;
        report.unresolved = unresolved.into_iter().map(|(_, path)| path).collect();

        info!(
            entries = report.entries_seen,
            assets = report.asset_count(),
            meta = report.meta_count(),
            bytes = report.bytes_written,
            unresolved = report.unresolved.len(),
            "extraction finished"
        );
        report
    }
}

/// Single-component file name for an identifier's placeholder.
///
/// Separators, `%` and a leading `.` are percent-encoded, so nested
/// identifiers stay directly under the output root and distinct identifiers
/// never share a placeholder.
fn placeholder_name(identifier: &str) -> PathBuf {
    let mut name = String::with_capacity(identifier.len());
    for (i, c) in identifier.char_indices() {
        match c {
            '%' => name.push_str("%25"),
            '/' => name.push_str("%2F"),
            '\\' => name.push_str("%5C"),
            '.' if i == 0 => name.push_str("%2E"),
            c => name.push(c),
        }
    }
    PathBuf::from(name)
}

fn with_meta_suffix(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(META_SUFFIX);
    PathBuf::from(name)
}
