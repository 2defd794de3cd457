use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use crate::entry::{Entry, EntryKind};
use crate::error::{Error, Result};
use crate::format::{self, Compression, Decoder};

/// Sequential reader over the records of a package.
pub struct ArchiveReader<R: Read> {
    archive: tar::Archive<Decoder<R>>,
    compression: Compression,
}

impl ArchiveReader<File> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::Input {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::new(file)
    }
}

impl<R: Read + Seek> ArchiveReader<R> {
    /// Detect the compression from the leading bytes and wrap the matching decoder.
    pub fn new(mut reader: R) -> Result<Self> {
        let compression = format::detect_from_reader(&mut reader)
            .map_err(Error::corrupted)?
            .ok_or(Error::UnsupportedFormat)?;
        Ok(Self::with_compression(reader, compression))
    }
}

impl<R: Read> ArchiveReader<R> {
    pub fn with_compression(reader: R, compression: Compression) -> Self {
        Self {
            archive: tar::Archive::new(compression.decoder(reader)),
            compression,
        }
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Lazily iterate the records in archive order.
    ///
    /// Each entry's payload must be consumed (or dropped) before the next is read.
    pub fn entries(&mut self) -> Result<Entries<'_, R>> {
        Ok(Entries {
            inner: self.archive.entries().map_err(Error::corrupted)?,
        })
    }
}

pub struct Entries<'a, R: 'a + Read> {
    inner: tar::Entries<'a, Decoder<R>>,
}

impl<'a, R: Read + 'a> Iterator for Entries<'a, R> {
    type Item = Result<Entry<tar::Entry<'a, Decoder<R>>>>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.inner.next()? {
            Ok(e) => e,
            Err(e) => return Some(Err(Error::corrupted(e))),
        };

        let name = match entry.path() {
            Ok(p) => p.to_string_lossy().into_owned(),
            Err(e) => return Some(Err(Error::corrupted(e))),
        };

        let is_file = entry.header().entry_type().is_file();
        let size = entry.size();
        let mut record = Entry::from_record(&name, size, entry);
        if !is_file {
            record.kind = EntryKind::Other;
        }

        Some(Ok(record))
    }
}
