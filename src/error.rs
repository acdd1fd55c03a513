//! Crate-wide error type.
//!
//! All fallible entry points in this crate return [`PermuteError`]. Errors
//! fall into three kinds: configuration errors raised eagerly by factories
//! and collection helpers, domain violations raised by the checked
//! `encode`/`decode` entry points, and iterator exhaustion raised only by
//! the checked iterator-advance entry point (the plain [`Iterator`] impls
//! signal exhaustion with `None`, not an error).

use thiserror::Error;

/// Errors surfaced by permutation construction, encoding, and iteration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PermuteError {
    /// `rounds` was negative.
    #[error("rounds must be >= 0, got {rounds}")]
    InvalidRounds {
        /// The rejected round count.
        rounds: i64,
    },

    /// A range window was empty or decreasing (`b < a`).
    #[error("range [{a}, {b}] is empty or decreasing")]
    InvalidRange {
        /// Lower bound of the rejected window.
        a: i64,
        /// Upper bound of the rejected window.
        b: i64,
    },

    /// A range window's length does not fit in the signed domain.
    #[error("range [{a}, {b}] has a length that overflows the signed domain")]
    RangeOverflow {
        /// Lower bound of the rejected window.
        a: i64,
        /// Upper bound of the rejected window.
        b: i64,
    },

    /// A checked `encode`/`decode` argument fell outside the declared domain.
    #[error("value {value} is out of domain [0, {size})")]
    OutOfDomain {
        /// The rejected value.
        value: i64,
        /// The domain size the value was checked against.
        size: i64,
    },

    /// A collection helper received a permutation whose size did not match
    /// the list it was applied to.
    #[error("permutation size {perm_size} does not match list length {list_len}")]
    LengthMismatch {
        /// The permutation's declared size.
        perm_size: i64,
        /// The length of the list passed to the helper.
        list_len: usize,
    },

    /// The checked iterator-advance entry point was called after exhaustion.
    #[error("iterator exhausted")]
    IteratorExhausted,
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = core::result::Result<T, PermuteError>;
