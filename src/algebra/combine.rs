//! Combining operations: union, intersection, symmetric difference,
//! subtraction, and the superset test.
//!
//! Operands are passed as an ordered sequence of iterables. An operand does
//! not need to be a set: any iterable whose items borrow as the receiver's
//! element type works, including `Vec`s with repeated items. Operands are
//! only iterated, never mutated.

use std::borrow::Borrow;
use std::iter::{self, Peekable};

use crate::capability::{SetLike, SpeciesOf};
use crate::error::{ArityError, SetAlgebraError};
use crate::species::get_species_constructor;

fn require_operands<O: Iterator>(
    operation: &'static str,
    operands: &mut Peekable<O>,
) -> Result<(), SetAlgebraError> {
    if operands.peek().is_none() {
        return Err(ArityError {
            operation,
            minimum: 1,
        }
        .into());
    }
    Ok(())
}

/// Returns the elements found in the receiver or in any operand.
///
/// Receiver elements are inserted first, then each operand's in order.
///
/// # Errors
///
/// Returns [`SetAlgebraError::Arity`] when `operands` is empty.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::union;
/// use std::collections::HashSet;
///
/// let set_a: HashSet<i32> = [1, 2, 3].into_iter().collect();
/// let set_b: HashSet<i32> = [2, 3, 4].into_iter().collect();
///
/// let result = union(&set_a, [&set_b]).unwrap();
/// assert_eq!(result, HashSet::from([1, 2, 3, 4]));
/// ```
pub fn union<S, O, I>(receiver: &S, operands: O) -> Result<SpeciesOf<S>, SetAlgebraError>
where
    S: SetLike,
    S::Element: Clone,
    O: IntoIterator<Item = I>,
    I: IntoIterator,
    I::Item: Borrow<S::Element>,
{
    let mut operands = operands.into_iter().peekable();
    require_operands("union", &mut operands)?;
    trace_operation!("union: receiver of size {}", receiver.size());

    let mut result = get_species_constructor(receiver).copy();
    for operand in operands {
        for item in operand {
            let element: &S::Element = item.borrow();
            result.add(element.clone());
        }
    }
    Ok(result)
}

/// Returns the elements found in the receiver and in every operand.
///
/// Each operand is snapshotted into the receiver's species first, so
/// repeated items inside one operand count once.
///
/// # Errors
///
/// Returns [`SetAlgebraError::Arity`] when `operands` is empty.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::intersect;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
///
/// let result = intersect(&set, [vec![2, 3, 4], vec![3, 2, 2]]).unwrap();
/// assert_eq!(result, HashSet::from([2, 3]));
/// ```
pub fn intersect<S, O, I>(receiver: &S, operands: O) -> Result<SpeciesOf<S>, SetAlgebraError>
where
    S: SetLike,
    S::Element: Clone,
    O: IntoIterator<Item = I>,
    I: IntoIterator,
    I::Item: Borrow<S::Element>,
{
    let mut operands = operands.into_iter().peekable();
    require_operands("intersect", &mut operands)?;
    trace_operation!("intersect: receiver of size {}", receiver.size());

    let constructor = get_species_constructor(receiver);
    let base = constructor.copy();
    let snapshots: Vec<SpeciesOf<S>> = operands
        .map(|operand| constructor.snapshot(operand))
        .collect();

    // an element in every snapshot is in the receiver's, so scanning it suffices
    let mut result: SpeciesOf<S> = constructor.empty();
    for element in base.elements() {
        if snapshots.iter().all(|snapshot| snapshot.has(element)) {
            result.add(element.clone());
        }
    }
    Ok(result)
}

/// Returns the elements found in exactly one of the receiver and the
/// operands.
///
/// This is the n-ary symmetric difference: with three or more inputs an
/// element present in three of them is excluded, unlike chaining a binary
/// XOR.
///
/// # Errors
///
/// Returns [`SetAlgebraError::Arity`] when `operands` is empty.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::xor;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
///
/// let result = xor(&set, [vec![2, 3, 4]]).unwrap();
/// assert_eq!(result, HashSet::from([1, 4]));
///
/// let result = xor(&set, [vec![1, 5], vec![1, 6]]).unwrap();
/// assert_eq!(result, HashSet::from([2, 3, 5, 6]));
/// ```
pub fn xor<S, O, I>(receiver: &S, operands: O) -> Result<SpeciesOf<S>, SetAlgebraError>
where
    S: SetLike,
    S::Element: Clone,
    O: IntoIterator<Item = I>,
    I: IntoIterator,
    I::Item: Borrow<S::Element>,
{
    let mut operands = operands.into_iter().peekable();
    require_operands("xor", &mut operands)?;
    trace_operation!("xor: receiver of size {}", receiver.size());

    let constructor = get_species_constructor(receiver);
    let snapshots: Vec<SpeciesOf<S>> = iter::once(constructor.copy())
        .chain(operands.map(|operand| constructor.snapshot(operand)))
        .collect();

    let mut result: SpeciesOf<S> = constructor.empty();
    for snapshot in &snapshots {
        for element in snapshot.elements() {
            let occurrences = snapshots
                .iter()
                .filter(|other| other.has(element))
                .count();
            if occurrences == 1 {
                result.add(element.clone());
            }
        }
    }
    Ok(result)
}

/// Returns the receiver's elements minus every element of every operand.
///
/// The result starts as a copy of the receiver; with no operands it is just
/// that copy.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::subtract;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
///
/// assert_eq!(subtract(&set, [vec![2, 3, 4]]), HashSet::from([1]));
/// assert_eq!(subtract(&set, Vec::<Vec<i32>>::new()), set);
/// ```
pub fn subtract<S, O, I>(receiver: &S, operands: O) -> SpeciesOf<S>
where
    S: SetLike,
    S::Element: Clone,
    O: IntoIterator<Item = I>,
    I: IntoIterator,
    I::Item: Borrow<S::Element>,
{
    trace_operation!("subtract: receiver of size {}", receiver.size());

    let mut result = get_species_constructor(receiver).copy();
    for operand in operands {
        for item in operand {
            let element: &S::Element = item.borrow();
            result.delete(element);
        }
    }
    result
}

/// Returns `true` if every item of `iterable` is in the receiver.
///
/// Vacuously `true` for an empty iterable. Stops at the first missing item.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::is_superset_of;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
///
/// assert!(is_superset_of(&set, [2, 3]));
/// assert!(!is_superset_of(&set, [2, 5]));
/// assert!(is_superset_of(&set, Vec::<i32>::new()));
/// ```
pub fn is_superset_of<S, I>(receiver: &S, iterable: I) -> bool
where
    S: SetLike,
    I: IntoIterator,
    I::Item: Borrow<S::Element>,
{
    trace_operation!("is_superset_of: receiver of size {}", receiver.size());

    iterable.into_iter().all(|item| {
        let element: &S::Element = item.borrow();
        receiver.has(element)
    })
}
