use std::io::{Read, Seek};
use std::path::Path;

use tracing::info;

use crate::entry::Entry;
use crate::error::Result;
use crate::options::ExtractOptions;
use crate::reader::ArchiveReader;
use crate::report::ExtractReport;
use crate::resolve::Resolver;

/// Resolve an entry sequence into `output_root`.
pub fn extract<I, R>(
    entries: I,
    output_root: impl AsRef<Path>,
    include_meta: bool,
) -> Result<ExtractReport>
where
    I: IntoIterator<Item = Result<Entry<R>>>,
    R: Read,
{
    let options = ExtractOptions::default().include_meta(include_meta);
    Resolver::new(output_root.as_ref(), &options).extract(entries)
}

/// Extract a package with automatic compression detection.
pub fn extract_from_reader<R: Read + Seek>(
    reader: R,
    output_root: &Path,
    options: &ExtractOptions,
) -> Result<ExtractReport> {
    let mut archive = ArchiveReader::new(reader)?;
    info!(
        format = %archive.compression(),
        output = %output_root.display(),
        "extracting package"
    );
    Resolver::new(output_root, options).extract(archive.entries()?)
}

/// Open the package at `path` and extract it.
pub fn extract_file(
    path: impl AsRef<Path>,
    output_root: &Path,
    options: &ExtractOptions,
) -> Result<ExtractReport> {
    let path = path.as_ref();
    let mut archive = ArchiveReader::open(path)?;
    info!(
        package = %path.display(),
        format = %archive.compression(),
        output = %output_root.display(),
        "extracting package"
    );
    Resolver::new(output_root, options).extract(archive.entries()?)
}
