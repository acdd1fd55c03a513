//! The 64-bit public permutation interface.

use crate::error::{PermuteError, Result};
use crate::rng::RandSource;
use crate::variant::{BoundedPermutation64, FullWordPermutation64, Table};

/// Capability set shared by every 64-bit permutation. See
/// [`crate::Permutation32`] for the 32-bit counterpart; the two interfaces
/// are deliberately kept separate rather than generic over word width,
/// mirroring the teacher's convention of concrete fixed-width types.
pub trait Permutation64 {
    /// The domain size, using the sentinel encoding of §3: `size >= 0` is
    /// a finite domain `[0, size)`; `-1` is the full `[0, 2^64)` domain;
    /// `size < -1` is a finite domain whose true cardinality is the
    /// unsigned reinterpretation of `size`.
    fn size(&self) -> i64;

    /// Encodes `x` without checking that it lies in the domain.
    fn encode_unchecked(&self, x: i64) -> i64;

    /// Decodes `y` without checking that it lies in the domain.
    fn decode_unchecked(&self, y: i64) -> i64;

    /// Validates that `v`'s unsigned reinterpretation lies in the domain.
    fn check_domain(&self, v: i64) -> Result<()> {
        let size = self.size();
        if size == -1 {
            return Ok(());
        }

        let n = size as u64;
        if (v as u64) < n {
            Ok(())
        } else {
            Err(PermuteError::OutOfDomain { value: v, size })
        }
    }

    /// Encodes `x`, validating `0 <= x < size` first (checked API, §6).
    fn encode(&self, x: i64) -> Result<i64> {
        self.check_domain(x)?;
        Ok(self.encode_unchecked(x))
    }

    /// Decodes `y`, validating `0 <= y < size` first (checked API, §6).
    fn decode(&self, y: i64) -> Result<i64> {
        self.check_domain(y)?;
        Ok(self.decode_unchecked(y))
    }
}

impl<P: Permutation64 + ?Sized> Permutation64 for &P {
    fn size(&self) -> i64 {
        (**self).size()
    }

    fn encode_unchecked(&self, x: i64) -> i64 {
        (**self).encode_unchecked(x)
    }

    fn decode_unchecked(&self, y: i64) -> i64 {
        (**self).decode_unchecked(y)
    }
}

pub(crate) enum Kind64 {
    Table(Table),
    Bounded(BoundedPermutation64),
    FullWord(FullWordPermutation64),
}

/// The concrete 64-bit permutation returned by the factory (§4.7).
pub struct Perm64 {
    size: i64,
    kind: Kind64,
}

impl Perm64 {
    pub(crate) fn new_table(size: i64, n: u32, rng: &mut dyn RandSource) -> Self {
        Self {
            size,
            kind: Kind64::Table(Table::new(n, rng)),
        }
    }

    pub(crate) fn new_bounded(size: i64, n: u64, rounds: u32, rng: &mut dyn RandSource) -> Self {
        Self {
            size,
            kind: Kind64::Bounded(BoundedPermutation64::new(n, rounds, rng)),
        }
    }

    pub(crate) fn new_full_word(rounds: u32, rng: &mut dyn RandSource) -> Self {
        Self {
            size: -1,
            kind: Kind64::FullWord(FullWordPermutation64::new(rounds, rng)),
        }
    }
}

impl Perm64 {
    /// Returns a finite, non-restartable iterator yielding
    /// `encode(offset), encode(offset + 1), ..., encode(size - 1)` (or,
    /// for the full-word domain, every remaining 64-bit value), per §4.5.
    pub fn iter_from(&self, offset: i64) -> Permutation64Iter<'_, Perm64> {
        Permutation64Iter::new(self, offset)
    }
}

impl Permutation64 for Perm64 {
    fn size(&self) -> i64 {
        self.size
    }

    fn encode_unchecked(&self, x: i64) -> i64 {
        match &self.kind {
            Kind64::Table(t) => t.encode(x as u32) as i64,
            Kind64::Bounded(b) => b.encode(x as u64) as i64,
            Kind64::FullWord(f) => f.encode(x as u64) as i64,
        }
    }

    fn decode_unchecked(&self, y: i64) -> i64 {
        match &self.kind {
            Kind64::Table(t) => t.decode(y as u32) as i64,
            Kind64::Bounded(b) => b.decode(y as u64) as i64,
            Kind64::FullWord(f) => f.decode(y as u64) as i64,
        }
    }
}

/// Lazy iterator produced by [`Permutation64::iter_from`].
pub struct Permutation64Iter<'a, P: Permutation64 + ?Sized> {
    perm: &'a P,
    current: u64,
    remaining: u128,
}

impl<'a, P: Permutation64 + ?Sized> Permutation64Iter<'a, P> {
    fn new(perm: &'a P, offset: i64) -> Self {
        let current = offset as u64 as u128;
        Self::new_at(perm, current)
    }

    /// Builds an iterator starting at a pre-computed raw (unsigned,
    /// bit-pattern) index rather than a caller-facing signed offset. Used
    /// by adapters (e.g. the range wrapper) whose notion of "offset" is a
    /// relative index already translated out of signed window coordinates.
    pub(crate) fn new_at(perm: &'a P, current: u128) -> Self {
        let total: u128 = if perm.size() == -1 {
            1u128 << 64
        } else {
            perm.size() as u64 as u128
        };
        let remaining = total.saturating_sub(current);

        Self {
            perm,
            current: current as u64,
            remaining,
        }
    }

    /// Checked-advance entry point: returns an error instead of `None`
    /// once the iterator is exhausted (§4.5, §7).
    pub fn advance(&mut self) -> Result<i64> {
        self.next().ok_or(PermuteError::IteratorExhausted)
    }
}

impl<'a, P: Permutation64 + ?Sized> Iterator for Permutation64Iter<'a, P> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }

        let x = self.current as i64;
        self.current = self.current.wrapping_add(1);
        self.remaining -= 1;

        Some(self.perm.encode_unchecked(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining.min(usize::MAX as u128) as usize;
        (remaining, Some(remaining))
    }
}
