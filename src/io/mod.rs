//! File I/O: FASTA/FASTQ ingestion, the SAM-like output writer, and the
//! gzip-or-plain abstraction shared by both.

pub(crate) mod fasta;
pub(crate) mod fastq;
pub(crate) mod sam;
pub(crate) mod truth;

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// A reader for a regular uncompressed file, or one transparently decoding a
/// gzip stream, selected once at open time from the path's extension and
/// opaque to callers after that, mirroring the teacher crate's gzip-or-plain
/// file abstraction.
pub(crate) enum InputSource {
    Plain(BufReader<File>),
    Gzipped(BufReader<MultiGzDecoder<File>>),
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::Plain(r) => r.read(buf),
            InputSource::Gzipped(r) => r.read(buf),
        }
    }
}

impl BufRead for InputSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            InputSource::Plain(r) => r.fill_buf(),
            InputSource::Gzipped(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputSource::Plain(r) => r.consume(amt),
            InputSource::Gzipped(r) => r.consume(amt),
        }
    }
}

/// Opens `path`, transparently wrapping it in a gzip decoder if the
/// extension is `.gz`.
pub(crate) fn open_input(path: impl AsRef<Path>) -> io::Result<InputSource> {
    let path = path.as_ref();
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(InputSource::Gzipped(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(InputSource::Plain(BufReader::new(file)))
    }
}
