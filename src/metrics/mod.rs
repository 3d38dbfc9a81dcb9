//! The metrics accumulator: compares alignments against an optional
//! ground-truth mapping and reports TP/FP/FN/TN plus derived rates.

use crate::align::Alignment;
use crate::io::truth::TruthSpan;
use crate::utils::get_hasher;
use foldhash::fast::RandomState;
use std::collections::{HashMap, HashSet};

/// A finished tally plus the precision/recall/accuracy derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Metrics {
    pub(crate) tp: u64,
    pub(crate) fp: u64,
    pub(crate) fn_: u64,
    pub(crate) tn: u64,

    pub(crate) precision: f64,
    pub(crate) recall:    f64,
    pub(crate) accuracy:  f64,
}

/// Compares every alignment in `alignments` against `truth` (within
/// `tolerance` bases) and computes the resulting [`Metrics`].
pub(crate) fn compute_metrics(
    alignments: &[Alignment],
    truth: &HashMap<String, TruthSpan, RandomState>,
    tolerance: i64,
    total_reads: u64,
) -> Metrics {
    let mut tp = 0u64;
    let mut fp = 0u64;
    let mut correct_reads: HashSet<&str, RandomState> = HashSet::with_hasher(get_hasher());

    for a in alignments {
        if !a.mapped {
            continue;
        }
        match truth.get(&a.read_id) {
            Some(span) => {
                let start_diff = (a.ref_start - span.start).abs();
                let end_diff = (a.ref_end - span.end).abs();
                if start_diff <= tolerance && end_diff <= tolerance {
                    tp += 1;
                    correct_reads.insert(a.read_id.as_str());
                } else {
                    fp += 1;
                }
            }
            None => fp += 1,
        }
    }

    let fn_ = truth.keys().filter(|id| !correct_reads.contains(id.as_str())).count() as u64;
    let tn = total_reads.saturating_sub(tp).saturating_sub(fp).saturating_sub(fn_);

    let precision = if tp + fp > 0 { tp as f64 / (tp + fp) as f64 } else { 0.0 };
    let recall = if tp + fn_ > 0 { tp as f64 / (tp + fn_) as f64 } else { 0.0 };
    let denom = tp + tn + fp + fn_;
    let accuracy = if denom > 0 { (tp + tn) as f64 / denom as f64 } else { 0.0 };

    Metrics { tp, fp, fn_, tn, precision, recall, accuracy }
}

impl Metrics {
    /// A short, human-readable summary suitable for printing to stderr at
    /// the end of a run.
    pub(crate) fn summary(&self) -> String {
        format!(
            "TP={} FP={} FN={} TN={} | precision={:.4} recall={:.4} accuracy={:.4}",
            self.tp, self.fp, self.fn_, self.tn, self.precision, self.recall, self.accuracy
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn aln(id: &str, mapped: bool, ref_start: i64, ref_end: i64) -> Alignment {
        Alignment {
            read_id: id.to_string(),
            ref_start,
            ref_end,
            mapped,
            ..Alignment::unmapped(id)
        }
    }

    fn truth_map(entries: &[(&str, i64, i64)]) -> HashMap<String, TruthSpan, RandomState> {
        let mut m: HashMap<String, TruthSpan, RandomState> = HashMap::with_hasher(get_hasher());
        for &(id, start, end) in entries {
            m.insert(id.to_string(), TruthSpan { start, end });
        }
        m
    }

    #[test]
    fn correctly_placed_mapped_read_is_a_true_positive() {
        let truth = truth_map(&[("r1", 10, 30)]);
        let alignments = vec![aln("r1", true, 11, 29)];
        let m = compute_metrics(&alignments, &truth, 5, 1);
        assert_eq!(m.tp, 1);
        assert_eq!(m.fp, 0);
        assert_eq!(m.fn_, 0);
    }

    #[test]
    fn mapped_outside_tolerance_is_a_false_positive() {
        let truth = truth_map(&[("r1", 10, 30)]);
        let alignments = vec![aln("r1", true, 100, 120)];
        let m = compute_metrics(&alignments, &truth, 5, 1);
        assert_eq!(m.tp, 0);
        assert_eq!(m.fp, 1);
        assert_eq!(m.fn_, 1);
    }

    #[test]
    fn unmapped_truth_read_is_a_false_negative() {
        let truth = truth_map(&[("r1", 10, 30)]);
        let alignments = vec![aln("r1", false, -1, -1)];
        let m = compute_metrics(&alignments, &truth, 5, 1);
        assert_eq!(m.tp, 0);
        assert_eq!(m.fp, 0);
        assert_eq!(m.fn_, 1);
    }

    #[test]
    fn mapped_read_absent_from_truth_is_a_false_positive() {
        let truth = truth_map(&[]);
        let alignments = vec![aln("r1", true, 10, 30)];
        let m = compute_metrics(&alignments, &truth, 5, 1);
        assert_eq!(m.fp, 1);
    }

    #[test]
    fn totals_never_exceed_total_reads() {
        let truth = truth_map(&[("r1", 10, 30), ("r2", 0, 5)]);
        let alignments = vec![aln("r1", true, 11, 29), aln("r2", false, -1, -1)];
        let m = compute_metrics(&alignments, &truth, 5, 2);
        assert!(m.tp + m.fp + m.fn_ + m.tn <= 2);
    }
}
