//! Sieve-of-Eratosthenes marking engine and candidate iteration.
//!
//! A [`Sieve`] owns one bit-packed [`BitSet`](sieve_core::BitSet): a set
//! bit means "proven composite, excluded", a clear bit means "still a
//! candidate". [`Sieve::filter`] performs one marking round; the caller
//! drives the outer loop, which keeps the engine minimal and lets callers
//! sieve in segments or resume partway.
//!
//! # Quick start
//!
//! ```rust
//! use sieve_engine::Sieve;
//!
//! let mut sieve = Sieve::new(30)?;
//! for n in 2..sieve.len() {
//!     if !sieve.is_marked(n)? {
//!         sieve.filter(n)?;
//!     }
//! }
//! let candidates: Vec<usize> = sieve.candidates().collect();
//! assert_eq!(candidates, [0, 1, 2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Marking always starts at `2n`, so indices 0 and 1 are never marked;
//! callers wanting true primality special-case them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod iter;
pub mod sieve;

pub use iter::{CandidateCursor, Candidates};
pub use sieve::Sieve;
