//! The alignment stage: anchoring, chaining, and banded extension.

pub(crate) mod chainer;
pub(crate) mod extender;
pub(crate) mod pipeline;

use crate::index::ReferenceIndex;
use crate::seed::minimizer::extract_minimizers;

/// A candidate seed tying a read position to a reference position, with the
/// strand relationship between them. `same_strand` is the XNOR of the read
/// and reference minimizer strands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Anchor {
    pub(crate) ref_pos:     usize,
    pub(crate) read_pos:    usize,
    pub(crate) same_strand: bool,
}

/// A coordinate-bearing alignment result for a single read.
#[derive(Debug, Clone)]
pub(crate) struct Alignment {
    pub(crate) read_id:     String,
    pub(crate) ref_start:   i64,
    pub(crate) ref_end:     i64,
    pub(crate) strand_plus: bool,
    pub(crate) cigar:       String,
    pub(crate) mapped:      bool,
    pub(crate) flag:        u16,
    pub(crate) mapq:        u8,
    pub(crate) rnext:       String,
    pub(crate) pnext:       i64,
    pub(crate) qual:        String,
}

impl Alignment {
    /// The canonical unmapped sentinel: `ref_start = ref_end = -1`, an empty
    /// CIGAR, `mapped = false`, and `mapq = 0`.
    pub(crate) fn unmapped(read_id: impl Into<String>) -> Self {
        Alignment {
            read_id: read_id.into(),
            ref_start: -1,
            ref_end: -1,
            strand_plus: false,
            cigar: String::new(),
            mapped: false,
            flag: 0,
            mapq: 0,
            rnext: "*".to_string(),
            pnext: 0,
            qual: "*".to_string(),
        }
    }
}

/// Extracts minimizers from `read` and looks each one up in `index`,
/// producing the anchor list consumed by the chainer.
pub(crate) fn seed_and_lookup(read: &[u8], index: &ReferenceIndex, seq_id: u32) -> Vec<Anchor> {
    let minimizers = extract_minimizers(read, index.kmer_size(), index.window_size(), seq_id);

    let mut anchors = Vec::new();
    for m in minimizers {
        for hit in index.lookup(m.hash) {
            anchors.push(Anchor {
                ref_pos:     hit.ref_pos,
                read_pos:    m.pos,
                same_strand: m.is_reverse == hit.is_reverse,
            });
        }
    }
    anchors
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn anchors_share_canonical_hash_with_their_source_kmers() {
        let reference = b"ACGTACGTACGTTGCAACGTGGGGCCCCAAAATTTT";
        let (k, w) = (4, 3);
        let index = ReferenceIndex::build(reference, k, w);

        // A read drawn verbatim from the reference should anchor back to it.
        let read = &reference[5..20];
        let anchors = seed_and_lookup(read, &index, 0);
        assert!(!anchors.is_empty());
    }
}
