//! [`SetLike`] for `std::collections::HashSet`.

use std::collections::HashSet;
use std::collections::hash_set;
use std::hash::{BuildHasher, Hash};

use super::SetLike;

// =============================================================================
// HashSet
// =============================================================================

/// Results are `HashSet`s sharing a clone of the receiver's hasher, so a set
/// built with a fast or seeded hasher keeps it through every operation.
impl<T, S> SetLike for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Clone,
{
    type Element = T;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;
    type Species<U>
        = HashSet<U, S>
    where
        U: Hash + Eq;

    #[inline]
    fn has(&self, element: &T) -> bool {
        self.contains(element)
    }

    #[inline]
    fn add(&mut self, element: T) -> bool {
        self.insert(element)
    }

    #[inline]
    fn delete(&mut self, element: &T) -> bool {
        self.remove(element)
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    #[inline]
    fn species<U>(&self) -> HashSet<U, S>
    where
        U: Hash + Eq,
    {
        HashSet::with_hasher(self.hasher().clone())
    }
}

// =============================================================================
// Fast Hasher Aliases
// =============================================================================

/// A `HashSet` using `rustc-hash`'s `FxHash`.
///
/// Not resistant to HashDoS; prefer it for trusted keys.
#[cfg(feature = "fxhash")]
pub type FxHashSet<T> = HashSet<T, rustc_hash::FxBuildHasher>;

/// A `HashSet` using `ahash`.
#[cfg(feature = "ahash")]
pub type AHashSet<T> = HashSet<T, ahash::RandomState>;
