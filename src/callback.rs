//! Callback helpers for the functional transforms.
//!
//! Every transform in [`algebra`](crate::algebra) calls its closure with
//! `(value, key, set)`. Sets have no separate key, so `value` and `key` are
//! the same element; the shape matches callbacks written for maps.
//!
//! Closures normally capture whatever context they need. [`bind`] exists for
//! callbacks that are written as plain functions taking an explicit context
//! first, and adapts them to the three-argument form.

/// Binds `context` as the first argument of `function`.
///
/// The returned closure passes `&context` ahead of `(value, key, set)` on
/// every call.
///
/// # Examples
///
/// ```rust
/// use set_algebra::algebra::SetAlgebra;
/// use set_algebra::callback::bind;
/// use std::collections::HashSet;
///
/// struct Threshold {
///     minimum: i32,
/// }
///
/// fn above(threshold: &Threshold, value: &i32, _: &i32, _: &HashSet<i32>) -> bool {
///     *value > threshold.minimum
/// }
///
/// let set: HashSet<i32> = [1, 5, 10].into_iter().collect();
/// let large = set.filter(bind(Threshold { minimum: 4 }, above));
///
/// assert_eq!(large.len(), 2);
/// ```
pub fn bind<C, T, S, R, F>(context: C, mut function: F) -> impl FnMut(&T, &T, &S) -> R
where
    F: FnMut(&C, &T, &T, &S) -> R,
{
    move |value, key, set| function(&context, value, key, set)
}
