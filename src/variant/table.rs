//! Table variant: a materialized permutation for tiny domains.
//!
//! Used whenever `0 <= size <= 16` (§4.7 of the design document). Building
//! a lookup table is cheap and simpler than cycle-walking when the domain
//! is this small, and both directions stay O(1).

use crate::rng::{RandSource, uniform_below};

/// A permutation materialized as a forward and inverse lookup table.
///
/// Shared by both the 32-bit and 64-bit public interfaces: a table of at
/// most 16 entries fits comfortably in `u32`, so there is no need for a
/// 64-bit-indexed sibling.
#[derive(Debug, Clone)]
pub(crate) struct Table {
    fwd: Vec<u32>,
    inv: Vec<u32>,
}

impl Table {
    /// Builds a table of size `n` by shuffling the identity permutation
    /// with a uniform Fisher-Yates shuffle driven by `rng`.
    pub(crate) fn new(n: u32, rng: &mut dyn RandSource) -> Self {
        debug_assert!(n <= 16, "Table variant is only for tiny domains");

        let mut fwd: Vec<u32> = (0..n).collect();

        for i in (1..n as usize).rev() {
            let j = uniform_below(rng, i as u32 + 1) as usize;
            fwd.swap(i, j);
        }

        let mut inv = vec![0u32; n as usize];
        for (i, &v) in fwd.iter().enumerate() {
            inv[v as usize] = i as u32;
        }

        Self { fwd, inv }
    }

    pub(crate) fn size(&self) -> u32 {
        self.fwd.len() as u32
    }

    pub(crate) fn encode(&self, x: u32) -> u32 {
        self.fwd[x as usize]
    }

    pub(crate) fn decode(&self, y: u32) -> u32 {
        self.inv[y as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeedRng;

    #[test]
    fn round_trips() {
        let mut rng = SeedRng::new(123);
        let table = Table::new(10, &mut rng);

        for x in 0..10 {
            assert_eq!(table.decode(table.encode(x)), x);
        }
    }

    #[test]
    fn is_a_bijection() {
        let mut rng = SeedRng::new(9);
        let table = Table::new(16, &mut rng);

        let mut seen = [false; 16];
        for x in 0..16 {
            let y = table.encode(x);
            assert!(!seen[y as usize], "duplicate output {y}");
            seen[y as usize] = true;
        }
    }

    #[test]
    fn size_one_is_identity() {
        let mut rng = SeedRng::new(1);
        let table = Table::new(1, &mut rng);

        assert_eq!(table.encode(0), 0);
        assert_eq!(table.decode(0), 0);
    }

    #[test]
    fn size_zero_has_no_entries() {
        let mut rng = SeedRng::new(1);
        let table = Table::new(0, &mut rng);
        assert_eq!(table.size(), 0);
    }
}
