//! FullWord variant, 32-bit word width.
//!
//! Operates on the entire `[0, 2^32)` domain (`size == -1` at the public
//! API, §3). The 32-bit analogue of
//! [`super::full_word64::FullWordPermutation64`], with xor-shift amounts
//! chosen to be strictly less than 32 (the source's 64-bit amounts of
//! 30/27/31 do not fit a 32-bit word).

use crate::math::inv_xor_shift_u32;
use crate::rng::RandSource;

/// xxHash32's second prime.
const C1: u32 = 0x85EB_CA77;
/// xxHash32's third prime.
const C2: u32 = 0xC2B2_AE3D;

const SHIFT_A: u32 = 13;
const SHIFT_B: u32 = 17;
const SHIFT_C: u32 = 5;

/// Reversible mixer over the full 32-bit word.
#[derive(Debug, Clone)]
pub(crate) struct FullWordPermutation32 {
    rounds: u32,
    k1: Vec<u32>,
    k2: Vec<u32>,
    c1_inv: u32,
    c2_inv: u32,
}

impl FullWordPermutation32 {
    pub(crate) fn new(rounds: u32, rng: &mut dyn RandSource) -> Self {
        debug_assert!(rounds >= 1, "rounds must be resolved before construction");

        let k1 = (0..rounds).map(|_| rng.next_u32()).collect();
        let k2 = (0..rounds).map(|_| rng.next_u32()).collect();

        Self {
            rounds,
            k1,
            k2,
            c1_inv: crate::math::inv_odd_u32(C1, u32::MAX),
            c2_inv: crate::math::inv_odd_u32(C2, u32::MAX),
        }
    }

    pub(crate) fn encode(&self, mut x: u32) -> u32 {
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

    pub(crate) fn decode(&self, mut y: u32) -> u32 {
        for r in (0..self.rounds as usize).rev() {
            y ^= self.k2[r];
            y = inv_xor_shift_u32(y, SHIFT_C, 32, u32::MAX);
            y = y.wrapping_mul(self.c2_inv);
            y = inv_xor_shift_u32(y, SHIFT_B, 32, u32::MAX);
            y = y.wrapping_mul(self.c1_inv);
            y = inv_xor_shift_u32(y, SHIFT_A, 32, u32::MAX);
            y ^= self.k1[r];
        }
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeedRng;

    fn make(rounds: u32, seed: u64) -> FullWordPermutation32 {
        let mut rng = SeedRng::new(seed);
        FullWordPermutation32::new(rounds, &mut rng)
    }

    #[test]
    fn round_trips_on_a_sample() {
        let perm = make(2, 1);
        let mut rng = SeedRng::new(0xC0FF_EE);

        for _ in 0..10_000 {
            let x = rng.next_u32();
            assert_eq!(perm.decode(perm.encode(x)), x);
        }
    }

    #[test]
    fn boundary_values_round_trip() {
        let perm = make(2, 1);
        for x in [0u32, 1, u32::MAX, u32::MAX - 1, 1u32 << 31] {
            assert_eq!(perm.decode(perm.encode(x)), x);
        }
    }

    #[test]
    fn deterministic_given_same_seed() {
        let a = make(2, 1);
        let b = make(2, 1);
        assert_eq!(a.encode(0), b.encode(0));
        assert_eq!(a.encode(1), b.encode(1));
    }
}
