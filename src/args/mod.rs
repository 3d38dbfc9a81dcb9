//! The command-line surface: a single `map` subcommand today, structured so
//! a future release can grow siblings alongside it the way the teacher
//! crate's own CLI does.

use crate::config::MapperConfig;
use clap::Args;
use std::path::PathBuf;

/// Arguments for `seqmap map`.
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Path to the FASTA file containing the reference sequence
    pub(crate) reference: PathBuf,

    /// Path to the first-mate FASTQ file
    pub(crate) reads1: PathBuf,

    /// Path to the second-mate FASTQ file
    pub(crate) reads2: PathBuf,

    #[arg(short, long)]
    /// Output filepath for the alignment stream. Written to stdout if not
    /// provided
    pub(crate) output: Option<PathBuf>,

    #[arg(long)]
    /// Path to a tab-delimited ground-truth file enabling the metrics report
    pub(crate) truth: Option<PathBuf>,

    #[arg(short, long, default_value_t = 15)]
    /// Minimizer k-mer size
    pub(crate) kmer_size: usize,

    #[arg(short, long, default_value_t = 15)]
    /// Minimizer window size
    pub(crate) window_size: usize,

    #[arg(long, default_value_t = 15)]
    /// Half-width of the banded DP around the estimated diagonal
    pub(crate) band: usize,

    #[arg(long, default_value_t = 10)]
    /// Padding added on either side of the chain-projected reference window
    pub(crate) pad: usize,

    #[arg(long, default_value_t = 0.40)]
    /// Alignments whose edit rate exceeds this are reported unmapped
    pub(crate) max_edit_rate: f64,

    #[arg(short, long)]
    /// Number of worker threads. Defaults to the physical core count
    pub(crate) threads: Option<usize>,

    #[arg(long, default_value_t = 5)]
    /// Coordinate tolerance, in bases, used by the metrics report
    pub(crate) tolerance: i64,

    #[arg(long)]
    /// Omit the `@HD`/`@SQ` header lines that otherwise precede the
    /// alignment stream
    pub(crate) no_header: bool,
}

impl MapArgs {
    /// Builds the mapper configuration implied by these arguments.
    pub(crate) fn to_config(&self) -> MapperConfig {
        MapperConfig {
            kmer_size:     self.kmer_size,
            window_size:   self.window_size,
            band:          self.band,
            pad:           self.pad,
            max_edit_rate: self.max_edit_rate,
            worker_count:  self.threads.unwrap_or_else(num_cpus::get_physical),
            tolerance:     self.tolerance,
        }
    }
}
