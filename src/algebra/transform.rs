//! Functional transforms: map, filter, and the quantifiers some, every and
//! find.
//!
//! Each transform calls its closure once per element, in the receiver's
//! iteration order, with `(value, key, set)`; value and key are the same
//! element. The quantifiers stop at the first decisive result.
//!
//! Every transform has a `try_` form whose closure returns a `Result`. The
//! first `Err` is returned unchanged and any partially built result is
//! dropped.

use std::convert::Infallible;
use std::hash::Hash;

use crate::capability::{SetLike, SpeciesOf};
use crate::species::get_species_constructor;

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

// =============================================================================
// Fallible Transforms
// =============================================================================

/// Maps every element through `function`, collecting the results in the
/// receiver's species.
///
/// # Errors
///
/// Returns the first error produced by `function`.
pub fn try_map<S, U, E, F>(receiver: &S, mut function: F) -> Result<S::Species<U>, E>
where
    S: SetLike,
    U: Hash + Eq,
    F: FnMut(&S::Element, &S::Element, &S) -> Result<U, E>,
{
    trace_operation!("map: receiver of size {}", receiver.size());

    let mut result: S::Species<U> = get_species_constructor(receiver).empty();
    for element in receiver.elements() {
        result.add(function(element, element, receiver)?);
    }
    Ok(result)
}

/// Keeps the elements for which `predicate` returns `Ok(true)`.
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
pub fn try_filter<S, E, P>(receiver: &S, mut predicate: P) -> Result<SpeciesOf<S>, E>
where
    S: SetLike,
    S::Element: Clone,
    P: FnMut(&S::Element, &S::Element, &S) -> Result<bool, E>,
{
    trace_operation!("filter: receiver of size {}", receiver.size());

    let mut result: SpeciesOf<S> = get_species_constructor(receiver).empty();
    for element in receiver.elements() {
        if predicate(element, element, receiver)? {
            result.add(element.clone());
        }
    }
    Ok(result)
}

/// Returns `Ok(true)` at the first element accepted by `predicate`.
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
pub fn try_some<S, E, P>(receiver: &S, mut predicate: P) -> Result<bool, E>
where
    S: SetLike,
    P: FnMut(&S::Element, &S::Element, &S) -> Result<bool, E>,
{
    trace_operation!("some: receiver of size {}", receiver.size());

    for element in receiver.elements() {
        if predicate(element, element, receiver)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Returns `Ok(false)` at the first element rejected by `predicate`.
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
pub fn try_every<S, E, P>(receiver: &S, mut predicate: P) -> Result<bool, E>
where
    S: SetLike,
    P: FnMut(&S::Element, &S::Element, &S) -> Result<bool, E>,
{
    trace_operation!("every: receiver of size {}", receiver.size());

    for element in receiver.elements() {
        if !predicate(element, element, receiver)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns the first element accepted by `predicate`.
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
pub fn try_find<'a, S, E, P>(receiver: &'a S, mut predicate: P) -> Result<Option<&'a S::Element>, E>
where
    S: SetLike,
    P: FnMut(&S::Element, &S::Element, &S) -> Result<bool, E>,
{
    trace_operation!("find: receiver of size {}", receiver.size());

    for element in receiver.elements() {
        if predicate(element, element, receiver)? {
            return Ok(Some(element));
        }
    }
    Ok(None)
}

// =============================================================================
// Infallible Transforms
// =============================================================================

/// Maps every element through `function`.
///
/// Results that compare equal collapse, so the output never has more
/// elements than the receiver.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::map;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
///
/// assert_eq!(map(&set, |x, _, _| x * 2), HashSet::from([2, 4, 6]));
/// assert_eq!(map(&set, |x, _, _| x % 2 == 0), HashSet::from([true, false]));
/// ```
pub fn map<S, U, F>(receiver: &S, mut function: F) -> S::Species<U>
where
    S: SetLike,
    U: Hash + Eq,
    F: FnMut(&S::Element, &S::Element, &S) -> U,
{
    infallible(try_map(receiver, |value, key, set| {
        Ok::<_, Infallible>(function(value, key, set))
    }))
}

/// Keeps the elements for which `predicate` returns `true`.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::filter;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
///
/// assert_eq!(filter(&set, |x, _, _| x % 2 == 0), HashSet::from([2]));
/// ```
pub fn filter<S, P>(receiver: &S, mut predicate: P) -> SpeciesOf<S>
where
    S: SetLike,
    S::Element: Clone,
    P: FnMut(&S::Element, &S::Element, &S) -> bool,
{
    infallible(try_filter(receiver, |value, key, set| {
        Ok::<_, Infallible>(predicate(value, key, set))
    }))
}

/// Returns `true` if `predicate` accepts any element.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::some;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
///
/// assert!(some(&set, |x, _, _| *x > 2));
/// assert!(!some(&set, |x, _, _| *x > 3));
/// ```
pub fn some<S, P>(receiver: &S, mut predicate: P) -> bool
where
    S: SetLike,
    P: FnMut(&S::Element, &S::Element, &S) -> bool,
{
    infallible(try_some(receiver, |value, key, set| {
        Ok::<_, Infallible>(predicate(value, key, set))
    }))
}

/// Returns `true` if `predicate` accepts every element.
///
/// Vacuously `true` for an empty receiver.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::every;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
///
/// assert!(every(&set, |x, _, _| *x > 0));
/// assert!(!every(&set, |x, _, _| *x > 1));
/// ```
pub fn every<S, P>(receiver: &S, mut predicate: P) -> bool
where
    S: SetLike,
    P: FnMut(&S::Element, &S::Element, &S) -> bool,
{
    infallible(try_every(receiver, |value, key, set| {
        Ok::<_, Infallible>(predicate(value, key, set))
    }))
}

/// Returns the first element accepted by `predicate`, or `None`.
///
/// The element itself is returned, not the predicate's result.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::find;
/// use indexmap::IndexSet;
///
/// let set: IndexSet<i32> = [1, 2, 3].into_iter().collect();
///
/// assert_eq!(find(&set, |x, _, _| *x > 1), Some(&2));
/// assert_eq!(find(&set, |x, _, _| *x > 5), None);
/// ```
pub fn find<'a, S, P>(receiver: &'a S, mut predicate: P) -> Option<&'a S::Element>
where
    S: SetLike,
    P: FnMut(&S::Element, &S::Element, &S) -> bool,
{
    infallible(try_find(receiver, |value, key, set| {
        Ok::<_, Infallible>(predicate(value, key, set))
    }))
}
