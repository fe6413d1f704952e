//! Error types for the sieve workspace.
//!
//! All subsystem errors live in this leaf crate. Every error is a
//! recoverable value returned to the immediate caller; nothing here
//! panics or aborts on misuse.

use std::error::Error;
use std::fmt;

/// Errors from [`BitSet`](crate::BitSet) construction and access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitSetError {
    /// An access at or past the logical length.
    ///
    /// The bounds contract is `index < length`: an index equal to the
    /// length is already out of bounds.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The bitset's logical length.
        length: usize,
    },
    /// The backing buffer could not be allocated at construction.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
}

impl fmt::Display for BitSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "index {index} out of bounds for bitset of length {length}")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "failed to allocate {requested} bytes of bit storage")
            }
        }
    }
}

impl Error for BitSetError {}

/// Errors from `Sieve::filter` in the engine crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// A marking stride below 2.
    ///
    /// Stride 0 would never advance and stride 1 would mark every index
    /// from 2 upward, so both are rejected before any bit is touched.
    InvalidStride {
        /// The rejected stride.
        n: usize,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStride { n } => {
                write!(f, "filter stride must be at least 2, got {n}")
            }
        }
    }
}

impl Error for FilterError {}
