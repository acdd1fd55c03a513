//! Deterministic, keyed, reversible permutations over bounded integer
//! domains.
//!
//! This crate builds bijective mappings `encode : D -> D` (with inverse
//! `decode`) over four kinds of domain: tiny finite sets (`Table`),
//! power-of-two-bounded finite sets reached by cycle-walking
//! (`Bounded*`), the entire 32-bit or 64-bit word (`FullWord*`), and
//! arbitrary contiguous integer windows (the range adapter). Every
//! variant is keyed from an RNG consumed once at construction time and
//! never retained; two permutations built from identical
//! `(size, seed, rounds)` always agree.
//!
//! # Module overview
//!
//! - `error`
//!   The crate-wide [`PermuteError`] and its `Result` alias.
//!
//! - `rng`
//!   The seam between this crate and randomness: the [`RandSource`] trait,
//!   the deterministic [`SeedRng`] generator, and rejection sampling.
//!
//! - `perm32` / `perm64`
//!   The public 32-bit and 64-bit interfaces: the [`Permutation32`] /
//!   [`Permutation64`] traits, the concrete [`Perm32`] / [`Perm64`] types
//!   returned by the factories, and their lazy iterators.
//!
//! - `range`
//!   The window adapter wrapping a finite base permutation to operate over
//!   an arbitrary contiguous integer range instead of `[0, N)`.
//!
//! - `factory`
//!   Size-driven and range-driven construction: `permute32`, `permute64`,
//!   and their seed- and range-based overloads.
//!
//! - `collections`
//!   `permuted`/`unpermuted` helpers applying a permutation to a list.
//!
//! - `config`
//!   `serde`-optional value types for embedding a permutation's size or
//!   range-window recipe in a caller's own configuration format.
//!
//! Internally, `math` holds the shared bit-math (block parameters,
//! modular inverses) and `variant` holds the four concrete mixers; neither
//! is exposed outside the crate.
//!
//! # Design goals
//!
//! - No hidden state: construction consumes randomness once, then the
//!   permutation is immutable and safe to share across threads.
//! - Explicit domain semantics: the `size` sentinel (`-1` full word,
//!   `< -1` unsigned-reinterpreted, `>= 0` ordinary finite) is the single
//!   source of truth for what a value must satisfy to be in range.
//! - Not a cryptographic primitive: the mixers give good dispersion for
//!   shuffling and obfuscating identifiers, not confidentiality.

mod collections;
mod config;
mod error;
mod factory;
mod math;
mod perm32;
mod perm64;
mod range;
mod rng;
mod variant;

pub use collections::{permuted32, permuted64, unpermuted32, unpermuted64};
pub use config::{DomainSize32, DomainSize64, Window32, Window64};
pub use error::{PermuteError, Result};
pub use factory::{
    permute32, permute32_range, permute32_range_seed, permute32_seed, permute64, permute64_range,
    permute64_range_seed, permute64_seed,
};
pub use perm32::{Perm32, Permutation32, Permutation32Iter};
pub use perm64::{Perm64, Permutation64, Permutation64Iter};
pub use range::{RangePermutation32, RangePermutation64};
pub use rng::{RandSource, SeedRng};
