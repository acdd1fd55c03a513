//! Size-driven construction of permutations (§4.7).
//!
//! These functions are the only way to obtain a [`crate::Perm32`] /
//! [`crate::Perm64`] or their range-adapted counterparts; the variant
//! constructors themselves are crate-private.

use crate::error::{PermuteError, Result};
use crate::perm32::Perm32;
use crate::perm64::Perm64;
use crate::range::{RangePermutation32, RangePermutation64};
use crate::rng::{RandSource, SeedRng};

fn default_rounds_32(size: i32) -> u32 {
    if size == -1 {
        return 2;
    }
    if size < -1 {
        let n = size as u32 as u64;
        return if n <= 1 << 16 {
            3
        } else if n <= 1 << 24 {
            4
        } else {
            5
        };
    }
    let n = size as u32 as u64;
    if n <= 1 << 10 {
        3
    } else if n <= 1 << 20 {
        4
    } else {
        6
    }
}

fn default_rounds_64(size: i64) -> u32 {
    if size == -1 {
        return 2;
    }
    if size < -1 {
        let n = size as u64;
        return if n <= 1 << 16 {
            3
        } else if n <= 1 << 24 {
            4
        } else {
            5
        };
    }
    let n = size as u64;
    if n <= 1 << 10 {
        3
    } else if n <= 1 << 20 {
        4
    } else {
        6
    }
}

fn resolve_rounds(rounds: i64) -> Result<Option<u32>> {
    if rounds < 0 {
        return Err(PermuteError::InvalidRounds { rounds });
    }
    if rounds == 0 {
        Ok(None)
    } else {
        Ok(Some(rounds as u32))
    }
}

/// Builds a 32-bit permutation over the domain named by `size` (sentinel
/// encoding of §3), dispatching to the Table, Bounded, or FullWord variant
/// per §4.7. `rounds = 0` uses the size band's default.
pub fn permute32(size: i32, rng: &mut dyn RandSource, rounds: i64) -> Result<Perm32> {
    let requested = resolve_rounds(rounds)?;
    let effective = requested.unwrap_or_else(|| default_rounds_32(size));

    let perm = if size == -1 {
        Perm32::new_full_word(effective, rng)
    } else if size < -1 {
        let n = size as u32;
        Perm32::new_bounded(size, n, effective, rng)
    } else if size <= 16 {
        Perm32::new_table(size, size as u32, rng)
    } else {
        Perm32::new_bounded(size, size as u32, effective, rng)
    };

    tracing::debug!(
        size,
        rounds = effective,
        "constructed 32-bit permutation"
    );

    Ok(perm)
}

/// Seed-based overload of [`permute32`]: builds a deterministic
/// [`SeedRng`] from `seed` and delegates.
pub fn permute32_seed(size: i32, seed: u64, rounds: i64) -> Result<Perm32> {
    let mut rng = SeedRng::new(seed);
    permute32(size, &mut rng, rounds)
}

/// Builds a 64-bit permutation; see [`permute32`] for the dispatch rule.
pub fn permute64(size: i64, rng: &mut dyn RandSource, rounds: i64) -> Result<Perm64> {
    let requested = resolve_rounds(rounds)?;
    let effective = requested.unwrap_or_else(|| default_rounds_64(size));

    let perm = if size == -1 {
        Perm64::new_full_word(effective, rng)
    } else if size < -1 {
        let n = size as u64;
        Perm64::new_bounded(size, n, effective, rng)
    } else if size <= 16 {
        Perm64::new_table(size, size as u32, rng)
    } else {
        Perm64::new_bounded(size, size as u64, effective, rng)
    };

    tracing::debug!(
        size,
        rounds = effective,
        "constructed 64-bit permutation"
    );

    Ok(perm)
}

/// Seed-based overload of [`permute64`].
pub fn permute64_seed(size: i64, seed: u64, rounds: i64) -> Result<Perm64> {
    let mut rng = SeedRng::new(seed);
    permute64(size, &mut rng, rounds)
}

fn validate_range32(a: i32, b: i32) -> Result<i32> {
    if b < a {
        return Err(PermuteError::InvalidRange {
            a: a as i64,
            b: b as i64,
        });
    }
    let len = (b as i64) - (a as i64) + 1;
    if len > i32::MAX as i64 {
        return Err(PermuteError::RangeOverflow {
            a: a as i64,
            b: b as i64,
        });
    }
    Ok(len as i32)
}

fn validate_range64(a: i64, b: i64) -> Result<i64> {
    if b < a {
        return Err(PermuteError::InvalidRange { a, b });
    }
    let len = (b as i128) - (a as i128) + 1;
    if len > i64::MAX as i128 {
        return Err(PermuteError::RangeOverflow { a, b });
    }
    Ok(len as i64)
}

/// Builds a 32-bit permutation over the contiguous window `[a, b]`
/// (§4.6), wrapping the size-based permutation for `b - a + 1` in the
/// range adapter.
pub fn permute32_range(a: i32, b: i32, rng: &mut dyn RandSource, rounds: i64) -> Result<RangePermutation32> {
    let len = validate_range32(a, b)?;
    let base = permute32(len, rng, rounds)?;
    Ok(RangePermutation32::new(a, b, base))
}

/// Seed-based overload of [`permute32_range`].
pub fn permute32_range_seed(a: i32, b: i32, seed: u64, rounds: i64) -> Result<RangePermutation32> {
    let mut rng = SeedRng::new(seed);
    permute32_range(a, b, &mut rng, rounds)
}

/// Builds a 64-bit permutation over the contiguous window `[a, b]`.
pub fn permute64_range(a: i64, b: i64, rng: &mut dyn RandSource, rounds: i64) -> Result<RangePermutation64> {
    let len = validate_range64(a, b)?;
    let base = permute64(len, rng, rounds)?;
    Ok(RangePermutation64::new(a, b, base))
}

/// Seed-based overload of [`permute64_range`].
pub fn permute64_range_seed(a: i64, b: i64, seed: u64, rounds: i64) -> Result<RangePermutation64> {
    let mut rng = SeedRng::new(seed);
    permute64_range(a, b, &mut rng, rounds)
}
