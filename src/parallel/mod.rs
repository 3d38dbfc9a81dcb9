//! The parallel executor: partitions read pairs into batches (targeting
//! roughly three batches per worker, the way the original batching scheme
//! sized its process pool) and runs them across a rayon-backed worker pool.
//! Workers share the reference string and index by reference; no other
//! mutable state crosses the fan-out.

#[cfg(not(feature = "dev_no_rayon"))]
use rayon::prelude::*;

use crate::align::pipeline::align_pair;
use crate::align::Alignment;
use crate::config::MapperConfig;
use crate::index::ReferenceIndex;
use crate::io::fastq::ReadRecord;

/// Aligns every pair in `pairs` against `reference`/`index`, fanning batches
/// of work out across however many rayon threads are configured.
pub(crate) fn run_all(pairs: &[(ReadRecord, ReadRecord)], reference: &[u8], index: &ReferenceIndex, config: &MapperConfig) -> Vec<Alignment> {
    let indexed: Vec<(usize, &(ReadRecord, ReadRecord))> = pairs.iter().enumerate().collect();
    let batch_size = (pairs.len() / (config.worker_count.max(1) * 3)).max(1);
    let batches: Vec<&[(usize, &(ReadRecord, ReadRecord))]> = indexed.chunks(batch_size).collect();

    #[cfg(not(feature = "dev_no_rayon"))]
    let results: Vec<Vec<Alignment>> = batches
        .par_iter()
        .map(|batch| process_batch(batch, reference, index, config))
        .collect();

    #[cfg(feature = "dev_no_rayon")]
    let results: Vec<Vec<Alignment>> = batches
        .iter()
        .map(|batch| process_batch(batch, reference, index, config))
        .collect();

    results.into_iter().flatten().collect()
}

fn process_batch(
    batch: &[(usize, &(ReadRecord, ReadRecord))], reference: &[u8], index: &ReferenceIndex, config: &MapperConfig,
) -> Vec<Alignment> {
    let mut out = Vec::with_capacity(batch.len() * 2);
    for &(pair_index, (front, back)) in batch {
        let (front_aln, back_aln) = align_pair(pair_index as u64, front, back, reference, index, config);
        out.push(front_aln);
        out.push(back_aln);
    }
    out
}
