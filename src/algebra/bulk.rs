//! In-place bulk mutators.
//!
//! These are the only operations that change the receiver. Both return the
//! receiver itself so calls can be chained.

use std::borrow::Borrow;

use crate::capability::SetLike;

/// Inserts every element, in order, into the receiver.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::add_elements;
/// use std::collections::HashSet;
///
/// let mut set: HashSet<i32> = HashSet::new();
/// add_elements(add_elements(&mut set, [1, 2]), [2, 3]);
///
/// assert_eq!(set, HashSet::from([1, 2, 3]));
/// ```
pub fn add_elements<S, I>(receiver: &mut S, elements: I) -> &mut S
where
    S: SetLike,
    I: IntoIterator<Item = S::Element>,
{
    trace_operation!("add_elements: receiver of size {}", receiver.size());

    for element in elements {
        receiver.add(element);
    }
    receiver
}

/// Deletes every element that is present from the receiver.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::remove_elements;
/// use std::collections::HashSet;
///
/// let mut set: HashSet<i32> = [1, 2, 3].into_iter().collect();
/// remove_elements(&mut set, [2, 9]);
///
/// assert_eq!(set, HashSet::from([1, 3]));
/// ```
pub fn remove_elements<S, I>(receiver: &mut S, elements: I) -> &mut S
where
    S: SetLike,
    I: IntoIterator,
    I::Item: Borrow<S::Element>,
{
    trace_operation!("remove_elements: receiver of size {}", receiver.size());

    for item in elements {
        let element: &S::Element = item.borrow();
        receiver.delete(element);
    }
    receiver
}
