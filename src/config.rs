//! The configuration surface shared by every stage of the pipeline. A single
//! struct is threaded through rather than a grab-bag of loose parameters, the
//! way the crate this one grew from bundles its own per-process option
//! structs.

/// Tunables for the mapping core. See `SPEC_FULL.md` §6 for the rationale
/// behind each default.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MapperConfig {
    /// Minimizer k-mer size.
    pub(crate) kmer_size:     usize,
    /// Minimizer window size.
    pub(crate) window_size:   usize,
    /// Half-width of the DP band around the estimated diagonal.
    pub(crate) band:          usize,
    /// Padding added on either side of the chain-projected reference window.
    pub(crate) pad:           usize,
    /// Alignments whose edit rate exceeds this are reported unmapped.
    pub(crate) max_edit_rate: f64,
    /// Number of parallel workers used by the executor.
    pub(crate) worker_count:  usize,
    /// Coordinate tolerance (in bases) used by the metrics accumulator.
    pub(crate) tolerance:     i64,
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig {
            kmer_size:     15,
            // The distilled spec disagreed with itself here (30 on the CLI
            // path, 10 on the library path). We standardize on one value for
            // both; see DESIGN.md for the resolved open question.
            window_size:   15,
            band:          15,
            pad:           10,
            max_edit_rate: 0.40,
            worker_count:  num_cpus::get_physical(),
            tolerance:     5,
        }
    }
}
