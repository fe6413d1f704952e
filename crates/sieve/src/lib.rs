//! Sieve of Eratosthenes on bit-packed candidate storage.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the sieve sub-crates. For most users, adding `sieve` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sieve::prelude::*;
//!
//! // Every index of [0, 30) starts as a candidate.
//! let mut sieve = Sieve::new(30)?;
//!
//! // Drive the outer loop: filter each unmarked stride once.
//! for n in 2..sieve.len() {
//!     if !sieve.is_marked(n)? {
//!         sieve.filter(n)?;
//!     }
//! }
//!
//! // Marking starts at 2n, so 0 and 1 survive alongside the primes.
//! let survivors: Vec<usize> = sieve.candidates().collect();
//! assert_eq!(survivors, [0, 1, 2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`storage`] | `sieve-core` | [`BitSet`](storage::BitSet) and the error taxonomy |
//! | [`engine`] | `sieve-engine` | [`Sieve`](engine::Sieve), cursor and iterator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Bit-packed storage and error types (`sieve-core`).
pub use sieve_core as storage;

/// The marking engine and candidate iteration (`sieve-engine`).
pub use sieve_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use sieve::prelude::*;
/// ```
pub mod prelude {
    // Storage
    pub use sieve_core::BitSet;

    // Errors
    pub use sieve_core::{BitSetError, FilterError};

    // Engine
    pub use sieve_engine::{CandidateCursor, Candidates, Sieve};
}
