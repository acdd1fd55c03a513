//! The four concrete permutation variants selected by the factory (§4.7).
//!
//! Each variant is a plain value type with `encode`/`decode` methods; the
//! public [`crate::Permutation32`]/[`crate::Permutation64`] traits wrap
//! these in a closed enum and dispatch with a `match`, per the design
//! document's note on polymorphism without inheritance.

mod bounded32;
mod bounded64;
mod full_word32;
mod full_word64;
mod table;

pub(crate) use bounded32::BoundedPermutation32;
pub(crate) use bounded64::BoundedPermutation64;
pub(crate) use full_word32::FullWordPermutation32;
pub(crate) use full_word64::FullWordPermutation64;
pub(crate) use table::Table;
