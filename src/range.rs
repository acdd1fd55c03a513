//! Range adapter: wraps a finite base permutation so it operates over an
//! arbitrary contiguous integer window `[a, b]` instead of `[0, N)` (§4.6).

use crate::error::{PermuteError, Result};
use crate::perm32::{Perm32, Permutation32, Permutation32Iter};
use crate::perm64::{Perm64, Permutation64, Permutation64Iter};

/// A finite base permutation shifted to cover `[a, a + size - 1]` instead
/// of `[0, size)`.
///
/// `encode_adapted(v) = a + encode(v - a)`, `decode_adapted(y) = a +
/// decode(y - a)`, per §4.6. Only the factory (not this type) validates
/// that `[a, b]` is non-empty, increasing, and fits the signed domain.
pub struct RangePermutation32 {
    a: i32,
    b: i32,
    base: Perm32,
}

impl RangePermutation32 {
    pub(crate) fn new(a: i32, b: i32, base: Perm32) -> Self {
        Self { a, b, base }
    }

    /// Returns a finite, non-restartable iterator yielding
    /// `encode(offset), encode(offset + 1), ..., encode(b)`, per §4.5/§4.6.
    pub fn iter_from(&self, offset: i32) -> Permutation32Iter<'_, RangePermutation32> {
        let relative = (offset as i64) - (self.a as i64);
        Permutation32Iter::new_at(self, relative.max(0) as u64)
    }
}

impl Permutation32 for RangePermutation32 {
    fn size(&self) -> i32 {
        self.base.size()
    }

    fn check_domain(&self, v: i32) -> Result<()> {
        if v >= self.a && v <= self.b {
            Ok(())
        } else {
            Err(PermuteError::OutOfDomain {
                value: v as i64,
                size: self.base.size() as i64,
            })
        }
    }

    fn encode_unchecked(&self, x: i32) -> i32 {
        let relative = (x as i64 - self.a as i64) as i32;
        self.a.wrapping_add(self.base.encode_unchecked(relative))
    }

    fn decode_unchecked(&self, y: i32) -> i32 {
        let relative = (y as i64 - self.a as i64) as i32;
        self.a.wrapping_add(self.base.decode_unchecked(relative))
    }
}

/// A finite base permutation shifted to cover `[a, a + size - 1]` instead
/// of `[0, size)`, 64-bit analogue of [`RangePermutation32`].
pub struct RangePermutation64 {
    a: i64,
    b: i64,
    base: Perm64,
}

impl RangePermutation64 {
    pub(crate) fn new(a: i64, b: i64, base: Perm64) -> Self {
        Self { a, b, base }
    }

    /// Returns a finite, non-restartable iterator yielding
    /// `encode(offset), encode(offset + 1), ..., encode(b)`, per §4.5/§4.6.
    pub fn iter_from(&self, offset: i64) -> Permutation64Iter<'_, RangePermutation64> {
        let relative = (offset as i128) - (self.a as i128);
        Permutation64Iter::new_at(self, relative.max(0) as u128)
    }
}

impl Permutation64 for RangePermutation64 {
    fn size(&self) -> i64 {
        self.base.size()
    }

    fn check_domain(&self, v: i64) -> Result<()> {
        if v >= self.a && v <= self.b {
            Ok(())
        } else {
            Err(PermuteError::OutOfDomain {
                value: v,
                size: self.base.size(),
            })
        }
    }

    fn encode_unchecked(&self, x: i64) -> i64 {
        let relative = (x as i128 - self.a as i128) as i64;
        self.a.wrapping_add(self.base.encode_unchecked(relative))
    }

    fn decode_unchecked(&self, y: i64) -> i64 {
        let relative = (y as i128 - self.a as i128) as i64;
        self.a.wrapping_add(self.base.decode_unchecked(relative))
    }
}
