//! Seed-to-RNG plumbing.
//!
//! The permutation engine treats randomness as an external collaborator:
//! variants draw a bounded, known-in-advance number of words from whatever
//! generator the caller supplies, and never retain it past construction.
//! This module defines the seam between the two.
//!
//! [`RandSource`] is the trait the core depends on. It is deliberately
//! smaller than `rand::RngCore` (one method) so that callers who already
//! have an `rand`-ecosystem generator can use it directly through the
//! blanket impl below, while callers who only have a 64-bit seed can use
//! [`SeedRng`], a small deterministic generator good enough for this
//! crate's non-cryptographic dispersion goals (see the crate's Non-goals:
//! this is not a PRP and does not need CSPRNG-grade output).

use rand::RngCore;

/// A source of uniformly random 64-bit words.
///
/// Implementations are consumed synchronously during permutation
/// construction and are never retained afterward.
pub trait RandSource {
    /// Returns the next pseudo-random 64-bit word.
    fn next_u64(&mut self) -> u64;

    /// Returns the next pseudo-random 32-bit word.
    ///
    /// The default implementation truncates [`RandSource::next_u64`];
    /// override it if the underlying generator has a cheaper native path.
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }
}

impl<R: RngCore> RandSource for R {
    fn next_u64(&mut self) -> u64 {
        RngCore::next_u64(self)
    }

    fn next_u32(&mut self) -> u32 {
        RngCore::next_u32(self)
    }
}

/// A small, deterministic, non-cryptographic generator seeded from a
/// single `u64`.
///
/// This is the generator used internally by the `permute(size, seed, ..)`
/// factory overloads (§6 of the design document): it exists so that those
/// overloads do not have to pull in a specific `rand` generator crate just
/// to turn a seed into a stream of words. It is the splitmix64 algorithm
/// (Steele, Lea & Flood, 2014), chosen for its simplicity, good avalanche
/// behavior, and the fact that it needs no internal array state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRng {
    state: u64,
}

impl SeedRng {
    /// Creates a generator from a 64-bit seed.
    ///
    /// Any seed value, including zero, produces a well-defined stream.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandSource for SeedRng {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);

        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

/// Draws a uniform value in `[0, n)` from `rng` using rejection sampling,
/// avoiding the modulo bias a plain `rng.next_u32() % n` would introduce.
pub(crate) fn uniform_below(rng: &mut dyn RandSource, n: u32) -> u32 {
    debug_assert!(n > 0, "n must be positive");

    if n == 1 {
        return 0;
    }

    let threshold = (u32::MAX - n + 1) % n;
    loop {
        let r = rng.next_u32();
        if r >= threshold {
            return r % n;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_from_seed() {
        let mut a = SeedRng::new(42);
        let mut b = SeedRng::new(42);

        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeedRng::new(1);
        let mut b = SeedRng::new(2);

        let seq_a: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let seq_b: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();

        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn zero_seed_is_well_defined() {
        let mut r = SeedRng::new(0);
        let first = r.next_u64();
        assert_ne!(first, 0);
    }

    #[test]
    fn uniform_below_stays_in_range() {
        let mut r = SeedRng::new(7);
        for _ in 0..1000 {
            let v = uniform_below(&mut r, 5);
            assert!(v < 5);
        }
    }

    #[test]
    fn uniform_below_one_is_always_zero() {
        let mut r = SeedRng::new(7);
        assert_eq!(uniform_below(&mut r, 1), 0);
    }
}
