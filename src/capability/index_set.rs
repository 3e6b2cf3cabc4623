//! [`SetLike`] for `indexmap::IndexSet`.
//!
//! `IndexSet` iterates in insertion order, and deletion through
//! [`SetLike::delete`] uses `shift_remove` so the remaining elements keep
//! that order. Operations over an `IndexSet` therefore produce results whose
//! iteration order is deterministic: receiver elements first, then operand
//! elements, each in the order they were visited.

use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;
use indexmap::set;

use super::SetLike;

impl<T, S> SetLike for IndexSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Clone,
{
    type Element = T;
    type Iter<'a>
        = set::Iter<'a, T>
    where
        Self: 'a;
    type Species<U>
        = IndexSet<U, S>
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
        self.shift_remove(element)
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
    fn species<U>(&self) -> IndexSet<U, S>
    where
        U: Hash + Eq,
    {
        IndexSet::with_hasher(self.hasher().clone())
    }
}
