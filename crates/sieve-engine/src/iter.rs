//! Lazy forward iteration over unmarked candidate indices.
//!
//! Two forms share one scan routine ([`Sieve::next_candidate`]):
//!
//! - [`Candidates`] borrows the sieve and implements [`Iterator`]. The
//!   borrow checker guarantees the sieve outlives the iterator.
//! - [`CandidateCursor`] is a detached scan position holding no
//!   reference at all. The caller pairs it with a sieve on each call,
//!   so the sieve stays mutable between steps and the traversal sees a
//!   live view rather than a snapshot.

use crate::sieve::Sieve;
use std::iter::FusedIterator;

/// Resumable scan position for candidate traversal.
///
/// Starts at index 0. Once the scan reaches the end of the sieve the
/// cursor is exhausted permanently; a fresh traversal needs a fresh
/// cursor.
///
/// # Examples
///
/// ```
/// use sieve_engine::{CandidateCursor, Sieve};
///
/// let mut sieve = Sieve::new(6)?;
/// let mut cursor = CandidateCursor::new();
///
/// assert_eq!(sieve.next_candidate(&mut cursor), Some(0));
/// assert_eq!(sieve.next_candidate(&mut cursor), Some(1));
///
/// // Marks added mid-traversal are visible to later steps.
/// sieve.filter(2)?;
/// assert_eq!(sieve.next_candidate(&mut cursor), Some(2));
/// assert_eq!(sieve.next_candidate(&mut cursor), Some(3));
/// assert_eq!(sieve.next_candidate(&mut cursor), Some(5));
/// assert_eq!(sieve.next_candidate(&mut cursor), None);
/// assert!(cursor.is_exhausted());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CandidateCursor {
    /// Next index to examine. Monotonically non-decreasing.
    pub(crate) position: usize,
    /// Terminal flag, set the first time the scan reaches the length.
    pub(crate) exhausted: bool,
}

impl CandidateCursor {
    /// A cursor at the start of the sieve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next index the cursor will examine.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor has permanently reached the end.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Iterator over the unmarked indices of a [`Sieve`], ascending.
///
/// Created by [`Sieve::candidates`] or by iterating `&Sieve`. Yields
/// every index whose bit is clear, in order, then `None` forever.
#[derive(Clone, Debug)]
pub struct Candidates<'a> {
    sieve: &'a Sieve,
    cursor: CandidateCursor,
}

impl<'a> Candidates<'a> {
    pub(crate) fn new(sieve: &'a Sieve) -> Self {
        Self {
            sieve,
            cursor: CandidateCursor::new(),
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.sieve.next_candidate(&mut self.cursor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor.exhausted {
            (0, Some(0))
        } else {
            // Every remaining index could still be a candidate.
            (0, Some(self.sieve.len() - self.cursor.position))
        }
    }
}

// Exhaustion is terminal, so the iterator is fused by construction.
impl FusedIterator for Candidates<'_> {}

impl<'a> IntoIterator for &'a Sieve {
    type Item = usize;
    type IntoIter = Candidates<'a>;

    fn into_iter(self) -> Candidates<'a> {
        self.candidates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_sieve_yields_every_index() {
        let sieve = Sieve::new(10).unwrap();
        let all: Vec<usize> = sieve.candidates().collect();
        assert_eq!(all, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn empty_sieve_yields_nothing() {
        let sieve = Sieve::new(0).unwrap();
        assert_eq!(sieve.candidates().next(), None);
    }

    #[test]
    fn skips_marked_indices() {
        let mut sieve = Sieve::new(8).unwrap();
        sieve.set_marked(0, true).unwrap();
        sieve.set_marked(3, true).unwrap();
        sieve.set_marked(7, true).unwrap();
        let rest: Vec<usize> = sieve.candidates().collect();
        assert_eq!(rest, [1, 2, 4, 5, 6]);
    }

    #[test]
    fn exhaustion_is_permanent() {
        let mut sieve = Sieve::new(3).unwrap();
        for i in 0..3 {
            sieve.set_marked(i, true).unwrap();
        }
        let mut iter = sieve.candidates();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn cursor_stays_exhausted_after_unmarking() {
        let mut sieve = Sieve::new(4).unwrap();
        for i in 0..4 {
            sieve.set_marked(i, true).unwrap();
        }
        let mut cursor = CandidateCursor::new();
        assert_eq!(sieve.next_candidate(&mut cursor), None);
        assert!(cursor.is_exhausted());

        // Unmarking afterwards does not revive the cursor.
        sieve.set_marked(2, false).unwrap();
        assert_eq!(sieve.next_candidate(&mut cursor), None);
    }

    #[test]
    fn cursor_sees_live_mutation_between_steps() {
        let mut sieve = Sieve::new(10).unwrap();
        let mut cursor = CandidateCursor::new();
        assert_eq!(sieve.next_candidate(&mut cursor), Some(0));
        assert_eq!(sieve.next_candidate(&mut cursor), Some(1));

        sieve.filter(2).unwrap();
        sieve.filter(3).unwrap();
        assert_eq!(sieve.next_candidate(&mut cursor), Some(2));
        assert_eq!(sieve.next_candidate(&mut cursor), Some(3));
        assert_eq!(sieve.next_candidate(&mut cursor), Some(5));
        assert_eq!(sieve.next_candidate(&mut cursor), Some(7));
        assert_eq!(sieve.next_candidate(&mut cursor), None);
    }

    #[test]
    fn cursor_position_is_one_past_the_yield() {
        let sieve = Sieve::new(5).unwrap();
        let mut cursor = CandidateCursor::new();
        assert_eq!(cursor.position(), 0);
        assert_eq!(sieve.next_candidate(&mut cursor), Some(0));
        assert_eq!(cursor.position(), 1);
        assert_eq!(sieve.next_candidate(&mut cursor), Some(1));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn iterator_and_cursor_agree() {
        let mut sieve = Sieve::new(50).unwrap();
        sieve.filter(2).unwrap();
        sieve.filter(3).unwrap();
        sieve.filter(5).unwrap();
        sieve.filter(7).unwrap();

        let via_iter: Vec<usize> = sieve.candidates().collect();
        let mut via_cursor = Vec::new();
        let mut cursor = CandidateCursor::new();
        while let Some(i) = sieve.next_candidate(&mut cursor) {
            via_cursor.push(i);
        }
        assert_eq!(via_iter, via_cursor);
    }

    #[test]
    fn into_iterator_for_reference() {
        let mut sieve = Sieve::new(6).unwrap();
        sieve.filter(2).unwrap();
        let mut seen = Vec::new();
        for i in &sieve {
            seen.push(i);
        }
        assert_eq!(seen, [0, 1, 2, 3, 5]);
    }

    #[test]
    fn size_hint_shrinks_and_terminates() {
        let sieve = Sieve::new(4).unwrap();
        let mut iter = sieve.candidates();
        assert_eq!(iter.size_hint(), (0, Some(4)));
        iter.next();
        assert_eq!(iter.size_hint(), (0, Some(3)));
        while iter.next().is_some() {}
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }
}
