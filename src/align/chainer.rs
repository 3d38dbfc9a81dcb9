//! Colinear chaining: from a read's anchors, isolate the largest group lying
//! on a single exact diagonal. No tolerance is given for near-diagonal noise:
//! minimizer jitter near indels produces neighbor-diagonal candidates, but a
//! single largest consistent diagonal is a cheap, robust heuristic that hands
//! the extender a tight window.

use super::Anchor;
use crate::utils::get_hasher;
use std::collections::HashMap;

/// Returns the largest exact-diagonal cluster of `anchors`. Empty input
/// yields an empty chain, and only empty input does.
pub(crate) fn chain(anchors: &[Anchor]) -> Vec<Anchor> {
    if anchors.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<Anchor> = anchors.to_vec();
    sorted.sort_by_key(|a| (a.read_pos, a.ref_pos));

    let mut buckets: HashMap<(bool, i64), Vec<Anchor>, _> = HashMap::with_hasher(get_hasher());
    let mut bucket_order: Vec<(bool, i64)> = Vec::new();

    for a in sorted {
        let diag = if a.same_strand {
            a.read_pos as i64 - a.ref_pos as i64
        } else {
            a.read_pos as i64 + a.ref_pos as i64
        };
        let key = (a.same_strand, diag);
        if !buckets.contains_key(&key) {
            bucket_order.push(key);
        }
        buckets.entry(key).or_default().push(a);
    }

    // Ties go to whichever bucket's first anchor sorts earliest; `bucket_order`
    // already reflects that since buckets were opened in sorted-anchor order.
    let mut best_key = bucket_order[0];
    for key in &bucket_order[1..] {
        if buckets[key].len() > buckets[&best_key].len() {
            best_key = *key;
        }
    }

    buckets.remove(&best_key).unwrap_or_default()
}
