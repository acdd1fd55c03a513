//! FullWord variant, 64-bit word width.
//!
//! Operates on the entire `[0, 2^64)` domain (`size == -1` at the public
//! API, §3). No cycle-walking is needed: every 64-bit round function
//! application is already a bijection on the full word.

use crate::math::inv_xor_shift_u64;
use crate::rng::RandSource;

/// xxHash64's second prime.
const C1: u64 = 0xC2B2_AE3D_27D4_EB4F;
/// xxHash64's third prime.
const C2: u64 = 0x1656_67B1_9E37_79F9;

const SHIFT_A: u32 = 30;
const SHIFT_B: u32 = 27;
const SHIFT_C: u32 = 31;

/// Reversible mixer over the full 64-bit word.
#[derive(Debug, Clone)]
pub(crate) struct FullWordPermutation64 {
    rounds: u32,
    k1: Vec<u64>,
    k2: Vec<u64>,
    c1_inv: u64,
    c2_inv: u64,
}

impl FullWordPermutation64 {
    pub(crate) fn new(rounds: u32, rng: &mut dyn RandSource) -> Self {
        debug_assert!(rounds >= 1, "rounds must be resolved before construction");

        let k1 = (0..rounds).map(|_| rng.next_u64()).collect();
        let k2 = (0..rounds).map(|_| rng.next_u64()).collect();

        Self {
            rounds,
            k1,
            k2,
            c1_inv: crate::math::inv_odd_u64(C1, u64::MAX),
            c2_inv: crate::math::inv_odd_u64(C2, u64::MAX),
        }
    }

    pub(crate) fn encode(&self, mut x: u64) -> u64 {
        for r in 0..self.rounds as usize {
            x ^= self.k1[r];
            x ^= x >> SHIFT_A;
            x = x.wrapping_mul(C1);
            x ^= x >> SHIFT_B;
            x = x.wrapping_mul(C2);
            x ^= x >> SHIFT_C;
            x ^= self.k2[r];
        }
        x
    }

    pub(crate) fn decode(&self, mut y: u64) -> u64 {
        for r in (0..self.rounds as usize).rev() {
            y ^= self.k2[r];
            y = inv_xor_shift_u64(y, SHIFT_C, 64, u64::MAX);
            y = y.wrapping_mul(self.c2_inv);
            y = inv_xor_shift_u64(y, SHIFT_B, 64, u64::MAX);
            y = y.wrapping_mul(self.c1_inv);
            y = inv_xor_shift_u64(y, SHIFT_A, 64, u64::MAX);
            y ^= self.k1[r];
        }
        y
    }
}
