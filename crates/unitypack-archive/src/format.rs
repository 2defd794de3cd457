use std::fmt;
use std::io::{self, Read, Seek};

use flate2::read::GzDecoder;

/// Compression wrapping the tar stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

impl Compression {
    pub fn decoder<R: Read>(self, reader: R) -> Decoder<R> {
        match self {
            Self::None => Decoder::Passthrough(reader),
            Self::Gzip => Decoder::Gzip(Box::new(GzDecoder::new(reader))),
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("tar"),
            Self::Gzip => f.write_str("tar+gzip"),
        }
    }
}

#[derive(Debug)]
pub enum Decoder<R> {
    Passthrough(R),
    Gzip(Box<GzDecoder<R>>),
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Passthrough(r) => r.read(buf),
            Self::Gzip(d) => d.read(buf),
        }
    }
}

const TAR_BLOCK_SIZE: usize = 512;

pub fn detect_format(data: &[u8]) -> Option<Compression> {
    match data {
        [0x1F, 0x8B, ..] => Some(Compression::Gzip),
        _ if is_tar_header(data) => Some(Compression::None),
        _ => None,
    }
}

fn is_tar_header(data: &[u8]) -> bool {
    data.len() >= TAR_BLOCK_SIZE && data[257..262] == *b"ustar"
}

/// Sniff the leading block of `reader`, then rewind it.
pub fn detect_from_reader<R: Read + Seek>(reader: &mut R) -> io::Result<Option<Compression>> {
    let mut header = Vec::with_capacity(TAR_BLOCK_SIZE);
    reader
        .by_ref()
        .take(TAR_BLOCK_SIZE as u64)
        .read_to_end(&mut header)?;
    reader.rewind()?;
    Ok(detect_format(&header))
}
