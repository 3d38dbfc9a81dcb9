//! A polynomial rolling hash in base 4, over the natural `u64` wraparound
//! modulus (2^64). Every multiply/add below must wrap rather than panic or
//! saturate: the hash is a first-class contract of this crate, and correctness
//! depends on bit-for-bit reproducibility of the wraparound arithmetic.

const BASE: u64 = 4;

/// Encodes a single nucleotide letter for hashing. Anything other than
/// A/T/G/C (including `N`) encodes to 0, same as `A`; the extender is what
/// refuses to let an `N` score as a match, not the hash.
#[inline]
pub(crate) fn encode(letter: u8) -> u64 {
    match letter {
        b'A' | b'a' => 0,
        b'T' | b't' => 1,
        b'G' | b'g' => 2,
        b'C' | b'c' => 3,
        _ => 0,
    }
}

/// A rolling hash over k-letter windows of the 4-letter alphabet.
pub(crate) struct RollingHash {
    high_power: u64,
}

impl RollingHash {
    /// Creates a rolling hash for windows of length `k`.
    pub(crate) fn new(k: usize) -> Self {
        let high_power = (0..k.saturating_sub(1)).fold(1u64, |acc, _| acc.wrapping_mul(BASE));
        RollingHash { high_power }
    }

    /// Computes the hash of a k-letter window from scratch.
    pub(crate) fn hash(&self, window: &[u8]) -> u64 {
        window
            .iter()
            .fold(0u64, |acc, &b| acc.wrapping_mul(BASE).wrapping_add(encode(b)))
    }

    /// Produces the hash of the next window given the hash of the previous
    /// one, in O(1): `((prev - encode(out)*base^(k-1))*base + encode(in))`,
    /// with all arithmetic wrapping modulo 2^64.
    #[inline]
    pub(crate) fn roll(&self, prev: u64, out_letter: u8, in_letter: u8) -> u64 {
        let without_out = prev.wrapping_sub(encode(out_letter).wrapping_mul(self.high_power));
        without_out.wrapping_mul(BASE).wrapping_add(encode(in_letter))
    }
}
