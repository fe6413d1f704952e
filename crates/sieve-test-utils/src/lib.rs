//! Test fixtures for sieve development.
//!
//! Provides a fully-driven sieve fixture and a naive reference oracle
//! for cross-checking candidate traversal in tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use sieve_engine::Sieve;

/// Build a sieve of `length` and run the canonical driving loop:
/// for each `n` in `2..length`, filter unless `n` is already marked.
pub fn sieved(length: usize) -> Sieve {
    let mut sieve = Sieve::new(length).expect("fixture allocation");
    for n in 2..length {
        if !sieve.is_marked(n).expect("n is below length") {
            sieve.filter(n).expect("n is at least 2");
        }
    }
    sieve
}

/// Naive oracle: the indices a fully-driven sieve of `length` leaves
/// unmarked, computed by trial division.
///
/// Marking always starts at `2n`, so 0 and 1 survive alongside the
/// primes.
pub fn reference_candidates(length: usize) -> Vec<usize> {
    (0..length).filter(|&i| i < 2 || is_prime(i)).collect()
}

fn is_prime(i: usize) -> bool {
    i >= 2 && !(2..i).any(|d| i % d == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_candidates_30() {
        assert_eq!(
            reference_candidates(30),
            [0, 1, 2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn reference_candidates_tiny() {
        assert!(reference_candidates(0).is_empty());
        assert_eq!(reference_candidates(1), [0]);
        assert_eq!(reference_candidates(2), [0, 1]);
        assert_eq!(reference_candidates(3), [0, 1, 2]);
    }

    #[test]
    fn sieved_fixture_has_expected_marks() {
        let sieve = sieved(10);
        assert!(sieve.is_marked(4).unwrap());
        assert!(sieve.is_marked(6).unwrap());
        assert!(sieve.is_marked(8).unwrap());
        assert!(sieve.is_marked(9).unwrap());
        assert!(!sieve.is_marked(7).unwrap());
    }
}
