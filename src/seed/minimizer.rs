//! Strand-canonical (w, k)-minimizer extraction over a rolling hash.

use crate::hashing::RollingHash;
use crate::seq::reverse_complement;
use std::collections::VecDeque;

/// A single minimizer emitted by [`extract_minimizers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Minimizer {
    pub(crate) hash:       u64,
    pub(crate) pos:        usize,
    pub(crate) seq_id:     u32,
    pub(crate) is_reverse: bool,
}

/// A candidate k-mer in the sliding window, before it is known whether it
/// will end up being the window's minimizer.
#[derive(Clone, Copy)]
struct Candidate {
    hash:       u64,
    pos:        usize,
    is_reverse: bool,
}

/// Extracts the strand-canonical (w, k)-minimizers of `seq`, in left-to-right
/// order with consecutive duplicate positions suppressed. Returns nothing if
/// `seq` is shorter than `k + w - 1`.
pub(crate) fn extract_minimizers(seq: &[u8], k: usize, w: usize, seq_id: u32) -> Vec<Minimizer> {
    if seq.len() < k + w - 1 {
        return Vec::new();
    }

    let hasher = RollingHash::new(k);
    let mut minimizers = Vec::new();
    let mut window: VecDeque<Candidate> = VecDeque::with_capacity(w);
    let mut last_emitted_pos: Option<usize> = None;

    let mut fwd_hash = hasher.hash(&seq[0..k]);

    for i in 0..=(seq.len() - k) {
        if i > 0 {
            fwd_hash = hasher.roll(fwd_hash, seq[i - 1], seq[i + k - 1]);
        }

        let rev_comp = reverse_complement(&seq[i..i + k]);
        let rev_hash = hasher.hash(&rev_comp);

        let (canonical_hash, is_reverse) = if rev_hash < fwd_hash {
            (rev_hash, true)
        } else {
            (fwd_hash, false)
        };

        // Drop candidates that have fallen out of the window on the left.
        while let Some(front) = window.front() {
            if front.pos + w <= i {
                window.pop_front();
            } else {
                break;
            }
        }

        // Maintain a monotonic-by-hash deque: anything strictly worse than
        // the incoming candidate can never again be the minimum, so drop it.
        // Ties keep the earlier (already-present) position as the minimum.
        while let Some(back) = window.back() {
            if back.hash > canonical_hash {
                window.pop_back();
            } else {
                break;
            }
        }

        window.push_back(Candidate {
            hash: canonical_hash,
            pos:  i,
            is_reverse,
        });

        if i + 1 >= w {
            let min = window.front().expect("window is non-empty once filled");
            if last_emitted_pos != Some(min.pos) {
                minimizers.push(Minimizer {
                    hash: min.hash,
                    pos: min.pos,
                    seq_id,
                    is_reverse: min.is_reverse,
                });
                last_emitted_pos = Some(min.pos);
            }
        }
    }

    minimizers
}
