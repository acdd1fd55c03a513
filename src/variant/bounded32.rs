//! Bounded single-multiplier variant, 32-bit word width.
//!
//! Covers both the `BoundedHalf` and `BoundedFull` variants of the 32-bit
//! interface (§4.7): the two differ only in the range of `n` the factory
//! hands them, not in the mixing code itself.

use crate::math::{block, inv_odd_u32, inv_xor_shift_u32};
use crate::rng::RandSource;

/// The fixed odd multiplier for the 32-bit bounded round function
/// (xxHash32's first prime, already odd).
const MULTIPLIER: u32 = 0x9E37_79B1;

/// Bounded permutation over `[0, size)` for some `17 <= size < 2^32`,
/// built from one reversible round function applied `rounds` times and
/// wrapped in a cycle-walking loop.
#[derive(Debug, Clone)]
pub(crate) struct BoundedPermutation32 {
    size: u32,
    k_bits: u32,
    mask: u32,
    rshift: u32,
    rounds: u32,
    keys: Vec<u32>,
    c_inv: u32,
}

impl BoundedPermutation32 {
    /// Builds a bounded permutation of size `n` with `rounds` mixing
    /// rounds (must be at least 1; the factory resolves `rounds == 0`
    /// to a size-band default before calling this).
    ///
    /// `n` must be greater than 4 (`k_bits >= 3`): below that, `block`'s
    /// `rshift = k_bits * 3 / 7` is zero, which collapses the round
    /// function's `x ^= x >> rshift` into `x ^= x` instead of a bijection.
    /// The factory never reaches this constructor for such `n` — sizes up
    /// to 16 are routed to the `Table` variant instead.
    pub(crate) fn new(n: u32, rounds: u32, rng: &mut dyn RandSource) -> Self {
        debug_assert!(rounds >= 1, "rounds must be resolved before construction");
        debug_assert!(n > 4, "bounded variant requires size > 4 (k_bits >= 3, rshift >= 1)");

        let b = block(n as u64, 32);
        let mask = b.mask as u32;
        let c_inv = inv_odd_u32(MULTIPLIER, mask);

        let keys = (0..rounds).map(|_| rng.next_u32()).collect();

        Self {
            size: n,
            k_bits: b.k_bits,
            mask,
            rshift: b.rshift,
            rounds,
            keys,
            c_inv,
        }
    }

    pub(crate) fn size(&self) -> u32 {
        self.size
    }

    fn round(&self, mut x: u32, r: usize) -> u32 {
        x = x.wrapping_mul(MULTIPLIER).wrapping_add(self.keys[r]) & self.mask;
        x ^ (x >> self.rshift)
    }

    fn inverse_round(&self, mut x: u32, r: usize) -> u32 {
        x = inv_xor_shift_u32(x, self.rshift, self.k_bits, self.mask);
        x.wrapping_sub(self.keys[r]).wrapping_mul(self.c_inv) & self.mask
    }

    /// Encodes `value`, which must already be known to be in `[0, size)`.
    pub(crate) fn encode(&self, value: u32) -> u32 {
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
    pub(crate) fn decode(&self, value: u32) -> u32 {
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
