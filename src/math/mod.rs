//! Shared bit-math utilities used by every permutation variant.
//!
//! This module contains the number-theoretic routines the round function
//! and its inverse depend on: the power-of-two block parameters for a
//! domain size, the multiplicative inverse of an odd multiplier modulo
//! `2^k`, and the inverse of a self xor-shift on a `k`-bit word. None of
//! this is specific to 32-bit or 64-bit words; both concrete variants call
//! into the same functions here, sized by the `mask`/`k_bits` they pass in.

mod block;
mod inverse;

pub(crate) use block::{Block, block};
pub(crate) use inverse::{inv_odd_u32, inv_odd_u64, inv_xor_shift_u32, inv_xor_shift_u64};
