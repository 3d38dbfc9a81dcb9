//! The tab-delimited, SAM-like output writer.

use crate::align::Alignment;
use std::io::{self, Write};

/// Writes the `@HD`/`@SQ` header block for a single reference.
pub(crate) fn write_header(mut out: impl Write, ref_name: &str, ref_len: usize) -> io::Result<()> {
    writeln!(out, "@HD\tVN:1.7\tSO:unsorted")?;
    writeln!(out, "@SQ\tSN:{ref_name}\tLN:{ref_len}")
}

/// Writes one 11-field record for `aln`, aligned to `ref_name`.
pub(crate) fn write_record(mut out: impl Write, aln: &Alignment, ref_name: &str) -> io::Result<()> {
    let (pos, cigar, tlen) = if aln.mapped {
        (aln.ref_start, aln.cigar.as_str(), aln.ref_end - aln.ref_start)
    } else {
        (-1, "*", -1)
    };

    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t*\t{}",
        aln.read_id, aln.flag, ref_name, pos, aln.mapq, cigar, aln.rnext, aln.pnext, tlen, aln.qual,
    )
}

#[cfg(test)]
mod test {
    use super::*;

    fn mapped_alignment() -> Alignment {
        Alignment {
            read_id:     "r1".to_string(),
            ref_start:   10,
            ref_end:     30,
            strand_plus: true,
            cigar:       "20M".to_string(),
            mapped:      true,
            flag:        67,
            mapq:        60,
            rnext:       "*".to_string(),
            pnext:       0,
            qual:        "IIIIIIIIIIIIIIIIIIII".to_string(),
        }
    }

    #[test]
    fn mapped_record_has_eleven_fields_and_correct_tlen() {
        let mut buf = Vec::new();
        write_record(&mut buf, &mapped_alignment(), "chr1").unwrap();
        let line = String::from_utf8(buf).unwrap();
        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        assert_eq!(fields.len(), 11);
        assert_eq!(fields[3], "10");
        assert_eq!(fields[8], "20");
    }

    #[test]
    fn unmapped_record_uses_sentinel_fields() {
        let mut buf = Vec::new();
        write_record(&mut buf, &Alignment::unmapped("r2"), "chr1").unwrap();
        let line = String::from_utf8(buf).unwrap();
        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        assert_eq!(fields[3], "-1");
        assert_eq!(fields[5], "*");
        assert_eq!(fields[8], "-1");
    }

    #[test]
    fn header_contains_hd_and_sq_lines() {
        let mut buf = Vec::new();
        write_header(&mut buf, "chr1", 1000).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("@HD\tVN:1.7\tSO:unsorted\n"));
        assert!(text.contains("@SQ\tSN:chr1\tLN:1000"));
    }
}
