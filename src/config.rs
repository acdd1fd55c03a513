//! Serializable configuration value types (§2.1/§3.1).
//!
//! These carry a permutation's *recipe* — the size sentinel or the range
//! window — for embedding in a caller's own config format. They hold no
//! keys and no RNG state; actually constructing a permutation from one
//! still goes through `factory`.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSize32(pub i32);

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSize64(pub i64);

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window32 {
    pub a: i32,
    pub b: i32,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window64 {
    pub a: i64,
    pub b: i64,
}

impl From<i32> for DomainSize32 {
    fn from(size: i32) -> Self {
        Self(size)
    }
}

impl From<DomainSize32> for i32 {
    fn from(size: DomainSize32) -> Self {
        size.0
    }
}

impl From<i64> for DomainSize64 {
    fn from(size: i64) -> Self {
        Self(size)
    }
}

impl From<DomainSize64> for i64 {
    fn from(size: DomainSize64) -> Self {
        size.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_size_round_trips_through_conversion() {
        let size: DomainSize32 = (-1i32).into();
        assert_eq!(i32::from(size), -1);
    }

    #[test]
    fn window_fields_are_accessible() {
        let w = Window64 { a: -100, b: 199 };
        assert_eq!(w.b - w.a + 1, 300);
    }
}
