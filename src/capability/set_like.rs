//! The set-like capability trait.

use std::hash::Hash;

/// A mutable, unordered container of unique elements.
///
/// `SetLike` is the capability every operation in this crate is written
/// against. A type qualifies by providing membership, insertion, deletion,
/// a size and iteration, plus a *species*: the container type (and an empty
/// instance of it) that operations use when they build a new result.
///
/// # Species
///
/// `Species<U>` emulates a type constructor in the same way
/// `TypeConstructor::WithType<B>` does for functors: it names "this kind of
/// container, holding `U`". Operations never hardcode a concrete result
/// type. They ask the receiver, so a wrapper type can keep its own type in
/// results (`type Species<U> = Wrapper<U>`) or redirect to a base container
/// (`type Species<U> = HashSet<U>`).
///
/// `species` receives `&self` so that per-instance state (a hasher, a
/// label) can flow into results.
///
/// # Laws
///
/// 1. **Uniqueness**: after `add(x)`, `has(&x)` is true and `size()` grows
///    by at most one.
/// 2. **Deletion**: after `delete(&x)`, `has(&x)` is false.
/// 3. **Size**: `size()` equals `elements().count()`.
/// 4. **Empty species**: `species::<U>().size() == 0`.
///
/// # Examples
///
/// ```rust
/// use set_algebra::capability::SetLike;
/// use std::collections::HashSet;
///
/// let mut set: HashSet<i32> = HashSet::new();
/// assert!(set.add(1));
/// assert!(!set.add(1));
/// assert!(set.has(&1));
/// assert_eq!(set.size(), 1);
///
/// let empty: HashSet<String> = set.species();
/// assert_eq!(empty.size(), 0);
/// ```
pub trait SetLike {
    /// The element type. Equality follows the container's own `Hash + Eq`.
    type Element: Hash + Eq;

    /// Iterator over borrowed elements, in the container's iteration order.
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// The container type results are built in, for element type `U`.
    type Species<U>: SetLike<Element = U>
    where
        U: Hash + Eq;

    /// Returns `true` if `element` is a member.
    fn has(&self, element: &Self::Element) -> bool;

    /// Inserts `element`, returning `true` if it was not already present.
    fn add(&mut self, element: Self::Element) -> bool;

    /// Removes `element`, returning `true` if it was present.
    fn delete(&mut self, element: &Self::Element) -> bool;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns an iterator over the elements.
    fn elements(&self) -> Self::Iter<'_>;

    /// Creates an empty container of this container's species.
    fn species<U>(&self) -> Self::Species<U>
    where
        U: Hash + Eq;
}

/// The species a receiver `S` builds results in, for its own element type.
pub type SpeciesOf<S> = <S as SetLike>::Species<<S as SetLike>::Element>;
