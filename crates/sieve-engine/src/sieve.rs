//! The sieve marking engine.

use crate::iter::{CandidateCursor, Candidates};
use sieve_core::{BitSet, BitSetError, FilterError};

/// A sieve of Eratosthenes over the indices `[0, length)`.
///
/// The sieve owns its [`BitSet`] exclusively and mirrors its lifecycle:
/// dropping the sieve releases the storage exactly once. A marked index
/// has been proven composite; an unmarked index is still a candidate.
///
/// # Examples
///
/// ```
/// use sieve_engine::Sieve;
///
/// let mut sieve = Sieve::new(10)?;
/// sieve.filter(2)?;
/// sieve.filter(3)?;
///
/// let candidates: Vec<usize> = sieve.candidates().collect();
/// assert_eq!(candidates, [0, 1, 2, 3, 5, 7]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sieve {
    bits: BitSet,
}

impl Sieve {
    /// Create a sieve of the given length with every index a candidate.
    ///
    /// `length == 0` is legal and yields a sieve with nothing to iterate.
    /// Returns `Err(BitSetError::AllocationFailed)` if the backing buffer
    /// cannot be allocated.
    pub fn new(length: usize) -> Result<Self, BitSetError> {
        Ok(Self {
            bits: BitSet::new(length)?,
        })
    }

    /// Number of indices covered by the sieve.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the sieve covers zero indices.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether `index` is currently marked composite.
    ///
    /// Returns `Err(BitSetError::IndexOutOfBounds)` when `index >= len()`.
    pub fn is_marked(&self, index: usize) -> Result<bool, BitSetError> {
        self.bits.get(index)
    }

    /// Mark or unmark `index` directly.
    ///
    /// Same bounds contract as [`is_marked`](Sieve::is_marked).
    pub fn set_marked(&mut self, index: usize, value: bool) -> Result<(), BitSetError> {
        self.bits.set(index, value)
    }

    /// Number of indices currently marked composite.
    pub fn marked_count(&self) -> usize {
        self.bits.count_set()
    }

    /// Run one marking round: mark every proper multiple of `n` below the
    /// sieve's length as composite.
    ///
    /// Returns `Err(FilterError::InvalidStride)` for `n < 2` without
    /// touching any bit. The call is a no-op when `n` is itself already
    /// marked (its multiples were covered by a smaller factor's round)
    /// or when `n >= len()`, where no multiple of `n` is in range.
    ///
    /// One call performs exactly one round; the caller drives the outer
    /// loop over successive `n`.
    pub fn filter(&mut self, n: usize) -> Result<(), FilterError> {
        if n < 2 {
            return Err(FilterError::InvalidStride { n });
        }
        let length = self.len();
        if n >= length {
            return Ok(());
        }
        let already = self.bits.get(n).expect("n < length checked above");
        if already {
            return Ok(());
        }
        for i in (2 * n..length).step_by(n) {
            self.bits.set(i, true).expect("range is bounded by length");
        }
        Ok(())
    }

    /// Iterate the unmarked indices in ascending order.
    ///
    /// The iterator borrows the sieve; for traversals interleaved with
    /// marking, pair a [`CandidateCursor`] with
    /// [`next_candidate`](Sieve::next_candidate) instead.
    pub fn candidates(&self) -> Candidates<'_> {
        Candidates::new(self)
    }

    /// Advance `cursor` to the next unmarked index, or exhaust it.
    ///
    /// Scans forward from the cursor position past marked indices. The
    /// first unmarked index is returned and the cursor moves one past it.
    /// When the scan reaches the end of the sieve the cursor becomes
    /// permanently exhausted and every later call returns `None`.
    ///
    /// The scan reads the live sieve, not a snapshot: marks added between
    /// calls change what later calls yield. A cursor started on one sieve
    /// and resumed on another is memory-safe but traverses whatever the
    /// second sieve holds at the cursor's position.
    pub fn next_candidate(&self, cursor: &mut CandidateCursor) -> Option<usize> {
        if cursor.exhausted {
            return None;
        }
        let length = self.len();
        let mut index = cursor.position;
        while index < length {
            let marked = self.bits.get(index).expect("index < length bounds the scan");
            if !marked {
                cursor.position = index + 1;
                return Some(index);
            }
            index += 1;
        }
        cursor.position = length;
        cursor.exhausted = true;
        None
    }
}
