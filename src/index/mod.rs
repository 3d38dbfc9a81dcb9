//! The reference index: a mapping from minimizer hash to every reference
//! occurrence of that minimizer. Built once by the coordinator and shared
//! read-only with every worker for the lifetime of the run.

use crate::seed::minimizer::extract_minimizers;
use crate::utils::get_hasher;
use foldhash::fast::RandomState;
use std::collections::HashMap;

/// One reference occurrence of a minimizer hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RefHit {
    pub(crate) ref_pos: usize,
    pub(crate) is_reverse: bool,
}

/// An immutable index over a reference sequence, built from its
/// strand-canonical minimizers. Constructed once and shared by reference
/// across all parallel workers.
pub(crate) struct ReferenceIndex {
    table: HashMap<u64, Vec<RefHit>, RandomState>,
    k:     usize,
    w:     usize,
}

impl ReferenceIndex {
    /// Builds the index by extracting minimizers over the whole of
    /// `reference` and grouping their reference occurrences by hash.
    pub(crate) fn build(reference: &[u8], k: usize, w: usize) -> Self {
        let mut table: HashMap<u64, Vec<RefHit>, RandomState> = HashMap::with_hasher(get_hasher());

        for m in extract_minimizers(reference, k, w, 0) {
            table.entry(m.hash).or_default().push(RefHit {
                ref_pos:    m.pos,
                is_reverse: m.is_reverse,
            });
        }

        ReferenceIndex { table, k, w }
    }

    /// Every reference occurrence recorded for `hash`, or an empty slice if
    /// none was ever inserted.
    #[inline]
    pub(crate) fn lookup(&self, hash: u64) -> &[RefHit] {
        self.table.get(&hash).map_or(&[], Vec::as_slice)
    }

    #[inline]
    pub(crate) fn kmer_size(&self) -> usize {
        self.k
    }

    #[inline]
    pub(crate) fn window_size(&self) -> usize {
        self.w
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_entry_corresponds_to_a_reference_minimizer() {
        let reference = b"ACGTACGTACGTTGCAACGTGGGGCCCCAAAATTTT";
        let (k, w) = (4, 3);
        let index = ReferenceIndex::build(reference, k, w);
        let minimizers = extract_minimizers(reference, k, w, 0);

        for m in &minimizers {
            let hits = index.lookup(m.hash);
            assert!(hits.iter().any(|h| h.ref_pos == m.pos && h.is_reverse == m.is_reverse));
        }
    }

    #[test]
    fn missing_hash_returns_empty() {
        let index = ReferenceIndex::build(b"ACGTACGTACGTTGCAACGTGGGGCCCCAAAATTTT", 4, 3);
        assert!(index.lookup(u64::MAX).is_empty());
    }
}
