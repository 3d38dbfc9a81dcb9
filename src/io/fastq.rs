//! Paired FASTQ ingestion: two four-line-per-record streams, read in
//! lockstep.

use super::open_input;
use crate::seq::canonicalize_case;
use crate::utils::err::WithFileContext;
use std::io::BufRead;
use std::path::Path;

/// One parsed FASTQ record.
#[derive(Debug, Clone)]
pub(crate) struct ReadRecord {
    pub(crate) id:       String,
    pub(crate) sequence: Vec<u8>,
    pub(crate) quality:  String,
}

impl ReadRecord {
    /// `false` exactly when the id's last character is `2`.
    pub(crate) fn is_first_of_pair(&self) -> bool {
        !self.id.ends_with('2')
    }
}

/// Reads every complete four-line record out of `path`. A trailing partial
/// record (fewer than four lines left at end-of-stream) is silently
/// dropped; a malformed record detected before EOF (a `+` separator line
/// that never arrives) is fatal.
fn read_records(path: impl AsRef<Path>) -> std::io::Result<Vec<ReadRecord>> {
    let path = path.as_ref();
    let reader = open_input(path).with_file_context(path.display())?;
    let mut lines = reader.lines();

    let mut records = Vec::new();
    while let Some(id_line) = lines.next().transpose().with_file_context(path.display())? {
        let Some(seq_line) = lines.next().transpose().with_file_context(path.display())? else {
            break; // dangling partial record at EOF: silently dropped
        };
        let Some(plus_line) = lines.next().transpose().with_file_context(path.display())? else {
            break;
        };
        let Some(qual_line) = lines.next().transpose().with_file_context(path.display())? else {
            break;
        };

        if !plus_line.starts_with('+') {
            return Err(std::io::Error::other(format!(
                "{path:?}: malformed FASTQ record for {id_line:?}, expected a '+' separator line"
            )));
        }
        let Some(id) = id_line.strip_prefix('@') else {
            return Err(std::io::Error::other(format!(
                "{path:?}: malformed FASTQ record, expected id line to start with '@', found {id_line:?}"
            )));
        };

        let mut sequence = seq_line.into_bytes();
        canonicalize_case(&mut sequence);
        records.push(ReadRecord {
            id: id.to_string(),
            sequence,
            quality: qual_line,
        });
    }

    Ok(records)
}

/// Reads `path1` and `path2` and zips their records into pairs, truncating
/// to the shorter of the two streams.
pub(crate) fn read_pairs(path1: impl AsRef<Path>, path2: impl AsRef<Path>) -> std::io::Result<Vec<(ReadRecord, ReadRecord)>> {
    let first = read_records(path1)?;
    let second = read_records(path2)?;
    Ok(first.into_iter().zip(second).collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn write_temp(tag: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("seqmap-fastq-test-{tag}-{:p}", contents.as_ptr()));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parses_well_formed_records() {
        let path = write_temp("a", "@read1\nACGT\n+\nIIII\n@read2\nTTTT\n+\nJJJJ\n");
        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "read1");
        assert_eq!(records[0].sequence, b"ACGT");
        assert_eq!(records[0].quality, "IIII");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn dangling_partial_record_is_silently_dropped() {
        let path = write_temp("b", "@read1\nACGT\n+\nIIII\n@read2\nTTTT\n");
        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_plus_separator_is_fatal() {
        let path = write_temp("c", "@read1\nACGT\nXXXX\nIIII\n");
        assert!(read_records(&path).is_err());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn sequence_is_folded_to_upper_case() {
        let path = write_temp("d", "@read1\nacgtN\n+\nIIIII\n");
        let records = read_records(&path).unwrap();
        assert_eq!(records[0].sequence, b"ACGTN");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn is_first_of_pair_follows_trailing_digit() {
        let r1 = ReadRecord { id: "frag.1".to_string(), sequence: vec![], quality: String::new() };
        let r2 = ReadRecord { id: "frag.2".to_string(), sequence: vec![], quality: String::new() };
        assert!(r1.is_first_of_pair());
        assert!(!r2.is_first_of_pair());
    }
}
