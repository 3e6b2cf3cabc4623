//! Construction hook resolution.
//!
//! Operations that return a new container never name a concrete type. They
//! resolve the receiver's species once with [`get_species_constructor`] and
//! build every result and snapshot through the returned
//! [`SpeciesConstructor`], so all containers produced by one call share the
//! receiver's species.
//!
//! # Examples
//!
//! ```rust
//! use set_algebra::capability::SetLike;
//! use set_algebra::species::get_species_constructor;
//! use std::collections::HashSet;
//!
//! let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! let constructor = get_species_constructor(&set);
//!
//! let snapshot = constructor.snapshot(vec![3, 4, 4]);
//! assert_eq!(snapshot.size(), 2);
//!
//! let copy = constructor.copy();
//! assert_eq!(copy, set);
//! ```

use std::borrow::Borrow;
use std::hash::Hash;

use crate::capability::{SetLike, SpeciesOf};

/// The resolved species of a receiver.
///
/// Borrowing the receiver lets per-instance state, such as a hasher, flow
/// into every container built through it.
pub struct SpeciesConstructor<'a, S> {
    receiver: &'a S,
}

impl<S> Clone for SpeciesConstructor<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SpeciesConstructor<'_, S> {}

/// Resolves the species of `receiver`.
#[inline]
pub const fn get_species_constructor<S: SetLike>(receiver: &S) -> SpeciesConstructor<'_, S> {
    SpeciesConstructor { receiver }
}

impl<S: SetLike> SpeciesConstructor<'_, S> {
    /// Creates an empty container of the species, holding `U`.
    #[inline]
    pub fn empty<U>(&self) -> S::Species<U>
    where
        U: Hash + Eq,
    {
        self.receiver.species()
    }

    /// Materializes `iterable` into a container of the species.
    ///
    /// Repeated items collapse, so the snapshot can answer membership
    /// questions about an operand that is not itself a set.
    pub fn snapshot<I>(&self, iterable: I) -> SpeciesOf<S>
    where
        I: IntoIterator,
        I::Item: Borrow<S::Element>,
        S::Element: Clone,
    {
        let mut snapshot: SpeciesOf<S> = self.empty();
        for item in iterable {
            let element: &S::Element = item.borrow();
            snapshot.add(element.clone());
        }
        snapshot
    }

    /// Copies the receiver's elements into a container of the species.
    pub fn copy(&self) -> SpeciesOf<S>
    where
        S::Element: Clone,
    {
        self.snapshot(self.receiver.elements())
    }
}
