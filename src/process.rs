//! The `map` subcommand: wires FASTA/FASTQ ingestion through the mapping
//! core, the parallel executor, the SAM-like writer, and the optional
//! metrics report, the same division of labor the teacher crate keeps
//! between its `args`/`processes` modules and its library core.

use crate::args::MapArgs;
use crate::index::ReferenceIndex;
use crate::io::fasta::read_reference;
use crate::io::fastq::read_pairs;
use crate::io::sam::{write_header, write_record};
use crate::io::truth::read_truth;
use crate::metrics::compute_metrics;
use crate::parallel::run_all;
use crate::utils::err::ResultWithErrorContext;
use std::io::{BufWriter, Write};

static MODULE: &str = module_path!();

/// Runs the `map` subcommand end to end.
pub fn map_process(args: MapArgs) {
    let config = args.to_config();

    let reference = read_reference(&args.reference)
        .unwrap_or_die(&format!("cannot read reference file '{}'\n  In: {MODULE}", args.reference.display()));

    let pairs = read_pairs(&args.reads1, &args.reads2).unwrap_or_die(&format!(
        "cannot read FASTQ pair '{}', '{}'\n  In: {MODULE}",
        args.reads1.display(),
        args.reads2.display()
    ));

    let index = ReferenceIndex::build(&reference.sequence, config.kmer_size, config.window_size);

    let alignments = run_all(&pairs, &reference.sequence, &index, &config);

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            std::fs::File::create(path)
                .unwrap_or_die(&format!("cannot create output file '{}'\n  In: {MODULE}", path.display())),
        )),
        None => Box::new(BufWriter::new(std::io::stdout())),
    };

    if !args.no_header {
        write_header(&mut writer, &reference.name, reference.sequence.len())
            .unwrap_or_die(&format!("failed to write SAM header\n  In: {MODULE}"));
    }
    for aln in &alignments {
        write_record(&mut writer, aln, &reference.name).unwrap_or_die(&format!("failed to write SAM record\n  In: {MODULE}"));
    }
    writer.flush().unwrap_or_die(&format!("failed to flush output\n  In: {MODULE}"));

    if let Some(truth_path) = &args.truth {
        let truth = read_truth(truth_path)
            .unwrap_or_die(&format!("cannot read ground-truth file '{}'\n  In: {MODULE}", truth_path.display()));
        let total_reads = alignments.len() as u64;
        let metrics = compute_metrics(&alignments, &truth, config.tolerance, total_reads);
        eprintln!("{}", metrics.summary());
    }
}
