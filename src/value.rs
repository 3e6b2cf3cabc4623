//! Floating point set elements.
//!
//! `f64` is neither `Eq` nor `Hash`, so it cannot be stored in a set
//! directly. [`SameValueZero`] wraps it with the equality scripting hosts use
//! for their sets:
//!
//! - `NaN` equals `NaN` (every NaN payload is the same element)
//! - `+0.0` equals `-0.0`
//! - every other value compares by `==`

use std::fmt;
use std::hash::{Hash, Hasher};

/// An `f64` with SameValueZero equality.
///
/// # Examples
///
/// ```rust
/// use set_algebra::value::SameValueZero;
/// use std::collections::HashSet;
///
/// let set: HashSet<SameValueZero> = [f64::NAN, f64::NAN, 0.0, -0.0, 1.5]
///     .into_iter()
///     .map(SameValueZero)
///     .collect();
///
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&SameValueZero(f64::NAN)));
/// assert!(set.contains(&SameValueZero(-0.0)));
/// ```
#[derive(Clone, Copy, Default)]
pub struct SameValueZero(pub f64);

impl SameValueZero {
    /// Returns the wrapped value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    fn canonical_bits(self) -> u64 {
        if self.0.is_nan() {
            // all NaN payloads are one element
            f64::NAN.to_bits()
        } else if self.0 == 0.0 {
            0.0_f64.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for SameValueZero {
    fn eq(&self, other: &Self) -> bool {
        (self.0.is_nan() && other.0.is_nan()) || self.0 == other.0
    }
}

impl Eq for SameValueZero {}

impl Hash for SameValueZero {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl From<f64> for SameValueZero {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<SameValueZero> for f64 {
    fn from(value: SameValueZero) -> Self {
        value.0
    }
}

impl fmt::Debug for SameValueZero {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, formatter)
    }
}

impl fmt::Display for SameValueZero {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::hash::BuildHasher;
    use std::collections::hash_map::RandomState;

    fn hash_of(value: SameValueZero, state: &RandomState) -> u64 {
        state.hash_one(value)
    }

    #[rstest]
    #[case(f64::NAN, -f64::NAN)]
    #[case(f64::NAN, f64::from_bits(0x7ff8_0000_0000_0001))]
    #[case(0.0, -0.0)]
    #[case(1.5, 1.5)]
    #[case(f64::INFINITY, f64::INFINITY)]
    fn test_equal_values_hash_equally(#[case] left: f64, #[case] right: f64) {
        let state = RandomState::new();
        assert_eq!(SameValueZero(left), SameValueZero(right));
        assert_eq!(
            hash_of(SameValueZero(left), &state),
            hash_of(SameValueZero(right), &state)
        );
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(1.0, -1.0)]
    #[case(f64::INFINITY, f64::NEG_INFINITY)]
    fn test_distinct_values_are_unequal(#[case] left: f64, #[case] right: f64) {
        assert_ne!(SameValueZero(left), SameValueZero(right));
    }

    proptest! {
        #[test]
        fn prop_equality_implies_equal_hash(left: f64, right: f64) {
            let state = RandomState::new();
            if SameValueZero(left) == SameValueZero(right) {
                prop_assert_eq!(
                    hash_of(SameValueZero(left), &state),
                    hash_of(SameValueZero(right), &state)
                );
            }
        }
    }
}
