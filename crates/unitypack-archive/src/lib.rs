//! Streaming extraction of asset packages.
//!
//! A package is a (usually gzip-compressed) tar stream whose records are
//! grouped by an opaque identifier: `<identifier>/asset`,
//! `<identifier>/asset.meta` and `<identifier>/pathname`. The records of one
//! identifier may arrive in any order, so files are written as soon as they
//! are seen and moved once their real path is known.
//!
//! # Architecture
//!
//! - `format.rs` - Format detection and decompression
//! - `entry.rs` - Record classification
//! - `reader.rs` - Lazy entry iterator over the tar stream
//! - `sanitize.rs` - Path name parsing (zip-slip prevention)
//! - `resolve.rs` - Single-pass identifier resolution
//! - `extract.rs` - Entry points

pub use entry::{Entry, EntryKind, classify};
pub use error::{Error, Result};
pub use extract::{extract, extract_file, extract_from_reader};
pub use format::Compression;
pub use options::{ExtractOptions, Progress};
pub use reader::{ArchiveReader, Entries};
pub use report::{ExtractReport, ExtractedAsset};
pub use resolve::Resolver;

pub mod entry;
mod error;
mod extract;
pub mod format;
pub mod options;
mod reader;
mod report;
mod resolve;
mod sanitize;
