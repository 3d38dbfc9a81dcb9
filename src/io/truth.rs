//! Ground-truth reader: `read_id\tstart\tend` lines into the solution map
//! consumed by the metrics accumulator.

use super::open_input;
use crate::utils::err::WithFileContext;
use crate::utils::get_hasher;
use foldhash::fast::RandomState;
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

/// The ground-truth mapping for one read: its expected half-open,
/// zero-based reference span.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TruthSpan {
    pub(crate) start: i64,
    pub(crate) end:   i64,
}

/// Parses a tab-delimited ground-truth file into a `read_id -> TruthSpan` map.
pub(crate) fn read_truth(path: impl AsRef<Path>) -> std::io::Result<HashMap<String, TruthSpan, RandomState>> {
    let path = path.as_ref();
    let reader = open_input(path).with_file_context(path.display())?;

    let mut map: HashMap<String, TruthSpan, RandomState> = HashMap::with_hasher(get_hasher());
    for line in reader.lines() {
        let line = line.with_file_context(path.display())?;
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let (Some(id), Some(start), Some(end)) = (fields.next(), fields.next(), fields.next()) else {
            return Err(std::io::Error::other(format!("{path:?}: malformed ground-truth line {line:?}")));
        };
        let start: i64 = start
            .parse()
            .map_err(|_| std::io::Error::other(format!("{path:?}: non-numeric start in {line:?}")))?;
        let end: i64 = end
            .parse()
            .map_err(|_| std::io::Error::other(format!("{path:?}: non-numeric end in {line:?}")))?;
        map.insert(id.to_string(), TruthSpan { start, end });
    }
    Ok(map)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_tab_delimited_spans() {
        let path = std::env::temp_dir().join("seqmap-truth-test.tsv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"read1\t10\t30\nread2\t0\t5\n").unwrap();

        let map = read_truth(&path).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["read1"].start, 10);
        assert_eq!(map["read1"].end, 30);
        std::fs::remove_file(path).unwrap();
    }
}
