//! Bounded single-multiplier variant, 64-bit word width.
//!
//! The natural 64-bit analogue of [`super::bounded32::BoundedPermutation32`]
//! (see the "64-bit bounded" open question resolved in the design
//! document): same shape, same round function, widened to `u64` words.

use crate::math::{block, inv_odd_u64, inv_xor_shift_u64};
use crate::rng::RandSource;

/// The fixed odd multiplier for the 64-bit bounded round function
/// (xxHash64's first prime, already odd).
const MULTIPLIER: u64 = 0x9E37_79B1_85EB_CA87;

/// Bounded permutation over `[0, size)` for some `17 <= size < 2^64`,
/// built from one reversible round function applied `rounds` times and
/// wrapped in a cycle-walking loop.
#[derive(Debug, Clone)]
pub(crate) struct BoundedPermutation64 {
    size: u64,
    k_bits: u32,
    mask: u64,
    rshift: u32,
    rounds: u32,
    keys: Vec<u64>,
    c_inv: u64,
}

impl BoundedPermutation64 {
    /// Builds a bounded permutation of size `n` with `rounds` mixing
    /// rounds (must be at least 1; the factory resolves `rounds == 0`
    /// to a size-band default before calling this).
    ///
    /// `n` must be greater than 4 (`k_bits >= 3`): below that, `block`'s
    /// `rshift = k_bits * 3 / 7` is zero, which collapses the round
    /// function's `x ^= x >> rshift` into `x ^= x` instead of a bijection.
    /// The factory never reaches this constructor for such `n` — sizes up
    /// to 16 are routed to the `Table` variant instead.
    pub(crate) fn new(n: u64, rounds: u32, rng: &mut dyn RandSource) -> Self {
        debug_assert!(rounds >= 1, "rounds must be resolved before construction");
        debug_assert!(n > 4, "bounded variant requires size > 4 (k_bits >= 3, rshift >= 1)");

        let b = block(n, 64);
        let c_inv = inv_odd_u64(MULTIPLIER, b.mask);

        let keys = (0..rounds).map(|_| rng.next_u64()).collect();

        Self {
            size: n,
            k_bits: b.k_bits,
            mask: b.mask,
            rshift: b.rshift,
            rounds,
            keys,
            c_inv,
        }
    }

    pub(crate) fn size(&self) -> u64 {
        self.size
    }

    fn round(&self, mut x: u64, r: usize) -> u64 {
        x = x.wrapping_mul(MULTIPLIER).wrapping_add(self.keys[r]) & self.mask;
        x ^ (x >> self.rshift)
    }

    fn inverse_round(&self, mut x: u64, r: usize) -> u64 {
        x = inv_xor_shift_u64(x, self.rshift, self.k_bits, self.mask);
        x.wrapping_sub(self.keys[r]).wrapping_mul(self.c_inv) & self.mask
    }

    /// Encodes `value`, which must already be known to be in `[0, size)`.
    pub(crate) fn encode(&self, value: u64) -> u64 {
        let mut x = value & self.mask;

        loop {
            for r in 0..self.rounds as usize {
                x = self.round(x, r);
            }

            if x < self.size {
                return x;
            }
        }
    }

    /// Decodes `value`, which must already be known to be in `[0, size)`.
    pub(crate) fn decode(&self, value: u64) -> u64 {
        let mut x = value & self.mask;

        loop {
            for r in (0..self.rounds as usize).rev() {
                x = self.inverse_round(x, r);
            }

            if x < self.size {
                return x;
            }
        }
    }
}
