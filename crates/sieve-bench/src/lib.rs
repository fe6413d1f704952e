//! Benchmark workloads for the sieve workspace.
//!
//! Provides deterministic, seeded access patterns so bench runs are
//! comparable across machines and commits.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `count` random in-bounds indices for a set of `length` bits.
///
/// The sequence is fully determined by `seed`.
pub fn random_indices(length: usize, count: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0..length)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_indices_in_bounds() {
        for &i in &random_indices(100, 1000, 42) {
            assert!(i < 100);
        }
    }

    #[test]
    fn random_indices_deterministic() {
        assert_eq!(random_indices(1000, 64, 7), random_indices(1000, 64, 7));
    }
}
