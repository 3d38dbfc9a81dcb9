//! Reference FASTA parsing.

use super::open_input;
use crate::seq::canonicalize_case;
use crate::utils::err::WithFileContext;
use std::io::BufRead;
use std::path::Path;

/// A single-record reference: its name and uppercased sequence.
pub(crate) struct Reference {
    pub(crate) name:     String,
    pub(crate) sequence: Vec<u8>,
}

/// Reads the first FASTA record from `path`: the header's first
/// whitespace-delimited token (minus the leading `>`) becomes the name, and
/// every subsequent non-empty line is stripped and concatenated to form the
/// sequence. A missing header or an empty resulting sequence is a fatal,
/// startup-time error, reported as `Err` so the caller can decide how fatal
/// to be.
pub(crate) fn read_reference(path: impl AsRef<Path>) -> std::io::Result<Reference> {
    let path = path.as_ref();
    let reader = open_input(path).with_file_context(path.display())?;

    let mut lines = reader.lines();
    let header = lines
        .next()
        .transpose()
        .with_file_context(path.display())?
        .ok_or_else(|| std::io::Error::other(format!("{path:?}: empty reference file, expected a FASTA header")))?;

    let header = header.trim_start();
    if !header.starts_with('>') {
        return Err(std::io::Error::other(format!(
            "{path:?}: expected a FASTA header line starting with '>', found {header:?}"
        )));
    }
    let name = header[1..]
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    let mut sequence = Vec::new();
    for line in lines {
        let line = line.with_file_context(path.display())?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            sequence.extend_from_slice(trimmed.as_bytes());
        }
    }
    canonicalize_case(&mut sequence);

    if sequence.is_empty() {
        return Err(std::io::Error::other(format!("{path:?}: reference sequence is empty")));
    }

    Ok(Reference { name, sequence })
}
