//! Collection helpers built on top of a permutation (§6).

use crate::error::{PermuteError, Result};
use crate::perm32::Permutation32;
use crate::perm64::Permutation64;

/// Returns a new list `L'` with `L'[i] = L[decode(i)]`.
///
/// `perm.size()` must be non-negative and equal `list.len()`.
pub fn permuted32<T: Clone>(list: &[T], perm: &impl Permutation32) -> Result<Vec<T>> {
    check_len32(list, perm)?;
    (0..list.len() as i32)
        .map(|i| Ok(list[perm.decode_unchecked(i) as usize].clone()))
        .collect()
}

/// Returns a new list `L'` with `L'[i] = L[encode(i)]`, the inverse of
/// [`permuted32`].
pub fn unpermuted32<T: Clone>(list: &[T], perm: &impl Permutation32) -> Result<Vec<T>> {
    check_len32(list, perm)?;
    (0..list.len() as i32)
        .map(|i| Ok(list[perm.encode_unchecked(i) as usize].clone()))
        .collect()
}

fn check_len32<T>(list: &[T], perm: &impl Permutation32) -> Result<()> {
    let size = perm.size();
    if size < 0 || size as usize != list.len() {
        return Err(PermuteError::LengthMismatch {
            perm_size: size as i64,
            list_len: list.len(),
        });
    }
    Ok(())
}

/// 64-bit analogue of [`permuted32`].
pub fn permuted64<T: Clone>(list: &[T], perm: &impl Permutation64) -> Result<Vec<T>> {
    check_len64(list, perm)?;
    (0..list.len() as i64)
        .map(|i| Ok(list[perm.decode_unchecked(i) as usize].clone()))
        .collect()
}

/// 64-bit analogue of [`unpermuted32`].
pub fn unpermuted64<T: Clone>(list: &[T], perm: &impl Permutation64) -> Result<Vec<T>> {
    check_len64(list, perm)?;
    (0..list.len() as i64)
        .map(|i| Ok(list[perm.encode_unchecked(i) as usize].clone()))
        .collect()
}

fn check_len64<T>(list: &[T], perm: &impl Permutation64) -> Result<()> {
    let size = perm.size();
    if size < 0 || size as usize != list.len() {
        return Err(PermuteError::LengthMismatch {
            perm_size: size,
            list_len: list.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::permute32_seed;

    #[test]
    fn permuted_and_unpermuted_are_inverses() {
        let perm = permute32_seed(6, 5, 0).unwrap();
        let list: Vec<char> = "abcdef".chars().collect();

        let shuffled = permuted32(&list, &perm).unwrap();
        let restored = unpermuted32(&shuffled, &perm).unwrap();

        assert_eq!(restored, list);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let perm = permute32_seed(6, 5, 0).unwrap();
        let list = vec![0, 1, 2];

        assert!(matches!(
            permuted32(&list, &perm),
            Err(PermuteError::LengthMismatch { .. })
        ));
    }
}
