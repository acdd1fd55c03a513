//! The 32-bit public permutation interface.

use crate::error::{PermuteError, Result};
use crate::rng::RandSource;
use crate::variant::{BoundedPermutation32, FullWordPermutation32, Table};

/// Capability set shared by every 32-bit permutation: the Table, Bounded,
/// and FullWord variants, plus the range adapter wrapping any of them.
///
/// This is the trait equivalent of the source's abstract base class: a
/// closed enum (see [`Perm32`]) implements it by dispatching on a `match`
/// rather than virtual calls, since the variant set never grows.
pub trait Permutation32 {
    /// The domain size, using the sentinel encoding of §3: `size >= 0` is
    /// a finite domain `[0, size)`; `-1` is the full `[0, 2^32)` domain;
    /// `size < -1` is a finite domain whose true cardinality is the
    /// unsigned reinterpretation of `size`.
    fn size(&self) -> i32;

    /// Encodes `x` without checking that it lies in the domain.
    ///
    /// # Preconditions
    /// `x`'s unsigned reinterpretation must be `< size` (or `size` must be
    /// the full-word sentinel `-1`).
    fn encode_unchecked(&self, x: i32) -> i32;

    /// Decodes `y` without checking that it lies in the domain.
    ///
    /// # Preconditions
    /// `y`'s unsigned reinterpretation must be `< size` (or `size` must be
    /// the full-word sentinel `-1`).
    fn decode_unchecked(&self, y: i32) -> i32;

    /// Validates that `v`'s unsigned reinterpretation lies in the domain.
    fn check_domain(&self, v: i32) -> Result<()> {
        let size = self.size();
        if size == -1 {
            return Ok(());
        }

        let n = size as u32;
        if (v as u32) < n {
            Ok(())
        } else {
            Err(PermuteError::OutOfDomain {
                value: v as i64,
                size: size as i64,
            })
        }
    }

    /// Encodes `x`, validating `0 <= x < size` first (checked API, §6).
    fn encode(&self, x: i32) -> Result<i32> {
        self.check_domain(x)?;
        Ok(self.encode_unchecked(x))
    }

    /// Decodes `y`, validating `0 <= y < size` first (checked API, §6).
    fn decode(&self, y: i32) -> Result<i32> {
        self.check_domain(y)?;
        Ok(self.decode_unchecked(y))
    }
}

/// Blanket impl so a range adapter (or any other wrapper) can hold a
/// borrowed base permutation instead of owning it.
impl<P: Permutation32 + ?Sized> Permutation32 for &P {
    fn size(&self) -> i32 {
        (**self).size()
    }

    fn encode_unchecked(&self, x: i32) -> i32 {
        (**self).encode_unchecked(x)
    }

    fn decode_unchecked(&self, y: i32) -> i32 {
        (**self).decode_unchecked(y)
    }
}

pub(crate) enum Kind32 {
    Table(Table),
    Bounded(BoundedPermutation32),
    FullWord(FullWordPermutation32),
}

/// The concrete 32-bit permutation returned by the factory (§4.7).
///
/// Internally a closed enum over the four variants of §2; externally just
/// an implementor of [`Permutation32`].
pub struct Perm32 {
    size: i32,
    kind: Kind32,
}

impl Perm32 {
    pub(crate) fn new_table(size: i32, n: u32, rng: &mut dyn RandSource) -> Self {
        Self {
            size,
            kind: Kind32::Table(Table::new(n, rng)),
        }
    }

    pub(crate) fn new_bounded(size: i32, n: u32, rounds: u32, rng: &mut dyn RandSource) -> Self {
        Self {
            size,
            kind: Kind32::Bounded(BoundedPermutation32::new(n, rounds, rng)),
        }
    }

    pub(crate) fn new_full_word(rounds: u32, rng: &mut dyn RandSource) -> Self {
        Self {
            size: -1,
            kind: Kind32::FullWord(FullWordPermutation32::new(rounds, rng)),
        }
    }
}

impl Perm32 {
    /// Returns a finite, non-restartable iterator yielding
    /// `encode(offset), encode(offset + 1), ..., encode(size - 1)` (or,
    /// for the full-word domain, every remaining 32-bit value), per §4.5.
    pub fn iter_from(&self, offset: i32) -> Permutation32Iter<'_, Perm32> {
        Permutation32Iter::new(self, offset)
    }
}

impl Permutation32 for Perm32 {
    fn size(&self) -> i32 {
        self.size
    }

    fn encode_unchecked(&self, x: i32) -> i32 {
        let x = x as u32;
        (match &self.kind {
            Kind32::Table(t) => t.encode(x),
            Kind32::Bounded(b) => b.encode(x),
            Kind32::FullWord(f) => f.encode(x),
        }) as i32
    }

    fn decode_unchecked(&self, y: i32) -> i32 {
        let y = y as u32;
        (match &self.kind {
            Kind32::Table(t) => t.decode(y),
            Kind32::Bounded(b) => b.decode(y),
            Kind32::FullWord(f) => f.decode(y),
        }) as i32
    }
}

/// Lazy iterator produced by [`Permutation32::iter_from`].
///
/// Stateful only in its current index, per §4.5; obtaining a fresh
/// iterator per thread is the caller's responsibility for concurrent use.
pub struct Permutation32Iter<'a, P: Permutation32 + ?Sized> {
    perm: &'a P,
    current: u64,
    remaining: u64,
}

impl<'a, P: Permutation32 + ?Sized> Permutation32Iter<'a, P> {
    fn new(perm: &'a P, offset: i32) -> Self {
        let current = offset as u32 as u64;
        Self::new_at(perm, current)
    }

    /// Builds an iterator starting at a pre-computed raw (unsigned,
    /// bit-pattern) index rather than a caller-facing signed offset. Used
    /// by adapters (e.g. the range wrapper) whose notion of "offset" is a
    /// relative index already translated out of signed window coordinates.
    pub(crate) fn new_at(perm: &'a P, current: u64) -> Self {
        let total: u64 = if perm.size() == -1 {
            1u64 << 32
        } else {
            perm.size() as u32 as u64
        };
        let remaining = total.saturating_sub(current);

        Self {
            perm,
            current,
            remaining,
        }
    }

    /// Checked-advance entry point: returns an error instead of `None`
    /// once the iterator is exhausted (§4.5, §7).
    pub fn advance(&mut self) -> Result<i32> {
        self.next().ok_or(PermuteError::IteratorExhausted)
    }
}

impl<'a, P: Permutation32 + ?Sized> Iterator for Permutation32Iter<'a, P> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }

        let x = self.current as u32 as i32;
        self.current = self.current.wrapping_add(1);
        self.remaining -= 1;

        Some(self.perm.encode_unchecked(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining.min(usize::MAX as u64) as usize;
        (remaining, Some(remaining))
    }
}
