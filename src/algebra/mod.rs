//! Set algebra and functional transforms over any [`SetLike`] container.
//!
//! Every operation is available in two forms:
//!
//! - free functions taking the receiver explicitly ([`union`],
//!   [`intersect`], [`map`], ...)
//! - methods of the [`SetAlgebra`] extension trait, implemented for every
//!   [`SetLike`] type
//!
//! | Operation          | Result                          | Receiver  |
//! |--------------------|---------------------------------|-----------|
//! | `union` / `unite`  | new species container           | unchanged |
//! | `intersect`        | new species container           | unchanged |
//! | `xor`              | new species container           | unchanged |
//! | `subtract`         | new species container           | unchanged |
//! | `is_superset_of`   | `bool`                          | unchanged |
//! | `map`              | new species container of `U`    | unchanged |
//! | `filter`           | new species container           | unchanged |
//! | `some` / `every`   | `bool`                          | unchanged |
//! | `find`             | `Option<&Element>`              | unchanged |
//! | `add_elements`     | `&mut` receiver                 | mutated   |
//! | `remove_elements`  | `&mut` receiver                 | mutated   |
//!
//! # Examples
//!
//! ```rust
//! use set_algebra::algebra::SetAlgebra;
//! use std::collections::HashSet;
//!
//! let set_a: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! let set_b: HashSet<i32> = [2, 3, 4].into_iter().collect();
//!
//! assert_eq!(set_a.unite([&set_b]).unwrap(), HashSet::from([1, 2, 3, 4]));
//! assert_eq!(set_a.intersect([&set_b]).unwrap(), HashSet::from([2, 3]));
//! assert_eq!(set_a.xor([&set_b]).unwrap(), HashSet::from([1, 4]));
//! assert_eq!(set_a.subtract([&set_b]), HashSet::from([1]));
//! assert!(set_a.is_superset_of([2, 3]));
//! assert!(!set_a.is_superset_of([2, 5]));
//! ```

mod bulk;
mod combine;
mod transform;

use std::borrow::Borrow;
use std::hash::Hash;

pub use bulk::{add_elements, remove_elements};
pub use combine::{intersect, is_superset_of, subtract, union, xor};
pub use transform::{
    every, filter, find, map, some, try_every, try_filter, try_find, try_map, try_some,
};

use crate::capability::{self, SetLike, SpeciesOf, Surface};
use crate::error::SetAlgebraError;

/// Set algebra as methods on every [`SetLike`] container.
///
/// `union` is exposed as [`unite`](SetAlgebra::unite): `HashSet` and
/// `IndexSet` have an inherent `union` method that would otherwise shadow
/// it.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::SetAlgebra;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
///
/// assert_eq!(set.map(|x, _, _| x * 2), HashSet::from([2, 4, 6]));
/// assert_eq!(set.filter(|x, _, _| x % 2 == 0), HashSet::from([2]));
/// assert!(set.some(|x, _, _| *x > 2));
/// assert!(set.every(|x, _, _| *x > 0));
/// assert_eq!(set.find(|x, _, _| *x > 5), None);
///
/// assert!(HashSet::<i32>::is_set(Some(&set)));
/// assert!(!HashSet::<i32>::is_set(Some(&vec![1, 2, 3])));
/// ```
pub trait SetAlgebra: SetLike + Sized {
    /// Returns `true` if `value` is set-like. See [`capability::is_set`].
    #[must_use]
    fn is_set(value: Option<&dyn Surface>) -> bool {
        capability::is_set(value)
    }

    /// Returns the elements found in `self` or in any operand.
    ///
    /// # Errors
    ///
    /// Returns [`SetAlgebraError::Arity`] when `operands` is empty.
    fn unite<O, I>(&self, operands: O) -> Result<SpeciesOf<Self>, SetAlgebraError>
    where
        Self::Element: Clone,
        O: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Borrow<Self::Element>,
    {
        union(self, operands)
    }

    /// Returns the elements found in `self` and in every operand.
    ///
    /// # Errors
    ///
    /// Returns [`SetAlgebraError::Arity`] when `operands` is empty.
    fn intersect<O, I>(&self, operands: O) -> Result<SpeciesOf<Self>, SetAlgebraError>
    where
        Self::Element: Clone,
        O: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Borrow<Self::Element>,
    {
        intersect(self, operands)
    }

    /// Returns the elements found in exactly one of `self` and the operands.
    ///
    /// # Errors
    ///
    /// Returns [`SetAlgebraError::Arity`] when `operands` is empty.
    fn xor<O, I>(&self, operands: O) -> Result<SpeciesOf<Self>, SetAlgebraError>
    where
        Self::Element: Clone,
        O: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Borrow<Self::Element>,
    {
        xor(self, operands)
    }

    /// Returns the elements of `self` that are in no operand.
    #[must_use]
    fn subtract<O, I>(&self, operands: O) -> SpeciesOf<Self>
    where
        Self::Element: Clone,
        O: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Borrow<Self::Element>,
    {
        subtract(self, operands)
    }

    /// Returns `true` if every item of `iterable` is in `self`.
    #[must_use]
    fn is_superset_of<I>(&self, iterable: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<Self::Element>,
    {
        is_superset_of(self, iterable)
    }

    /// Maps every element through `function`.
    #[must_use]
    fn map<U, F>(&self, function: F) -> Self::Species<U>
    where
        U: Hash + Eq,
        F: FnMut(&Self::Element, &Self::Element, &Self) -> U,
    {
        map(self, function)
    }

    /// Keeps the elements accepted by `predicate`.
    #[must_use]
    fn filter<P>(&self, predicate: P) -> SpeciesOf<Self>
    where
        Self::Element: Clone,
        P: FnMut(&Self::Element, &Self::Element, &Self) -> bool,
    {
        filter(self, predicate)
    }

    /// Returns `true` if `predicate` accepts any element.
    fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element, &Self::Element, &Self) -> bool,
    {
        some(self, predicate)
    }

    /// Returns `true` if `predicate` accepts every element.
    fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element, &Self::Element, &Self) -> bool,
    {
        every(self, predicate)
    }

    /// Returns the first element accepted by `predicate`.
    fn find<P>(&self, predicate: P) -> Option<&Self::Element>
    where
        P: FnMut(&Self::Element, &Self::Element, &Self) -> bool,
    {
        find(self, predicate)
    }

    /// Fallible [`map`](SetAlgebra::map).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    fn try_map<U, E, F>(&self, function: F) -> Result<Self::Species<U>, E>
    where
        U: Hash + Eq,
        F: FnMut(&Self::Element, &Self::Element, &Self) -> Result<U, E>,
    {
        try_map(self, function)
    }

    /// Fallible [`filter`](SetAlgebra::filter).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    fn try_filter<E, P>(&self, predicate: P) -> Result<SpeciesOf<Self>, E>
    where
        Self::Element: Clone,
        P: FnMut(&Self::Element, &Self::Element, &Self) -> Result<bool, E>,
    {
        try_filter(self, predicate)
    }

    /// Fallible [`some`](SetAlgebra::some).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    fn try_some<E, P>(&self, predicate: P) -> Result<bool, E>
    where
        P: FnMut(&Self::Element, &Self::Element, &Self) -> Result<bool, E>,
    {
        try_some(self, predicate)
    }

    /// Fallible [`every`](SetAlgebra::every).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    fn try_every<E, P>(&self, predicate: P) -> Result<bool, E>
    where
        P: FnMut(&Self::Element, &Self::Element, &Self) -> Result<bool, E>,
    {
        try_every(self, predicate)
    }

    /// Fallible [`find`](SetAlgebra::find).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    fn try_find<E, P>(&self, predicate: P) -> Result<Option<&Self::Element>, E>
    where
        P: FnMut(&Self::Element, &Self::Element, &Self) -> Result<bool, E>,
    {
        try_find(self, predicate)
    }

    /// Inserts every element into `self` and returns `self`.
    fn add_elements<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = Self::Element>,
    {
        add_elements(self, elements)
    }

    /// Deletes every present element from `self` and returns `self`.
    fn remove_elements<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Borrow<Self::Element>,
    {
        remove_elements(self, elements)
    }
}

impl<S: SetLike> SetAlgebra for S {}
