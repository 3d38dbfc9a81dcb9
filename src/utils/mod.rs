use foldhash::fast::RandomState;

pub(crate) mod err;

/// Returns the hasher used for the reference index and other large maps in
/// the pipeline. Kept as a single choke point so the hashing strategy can be
/// swapped without touching call sites, following the pattern of the crate
/// this one was grown from.
#[inline]
pub(crate) fn get_hasher() -> RandomState {
    RandomState::default()
}
