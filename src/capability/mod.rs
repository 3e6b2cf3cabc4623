//! The set-like capability.
//!
//! This module defines what it means to be a set for the purposes of this
//! crate, in two forms:
//!
//! - [`SetLike`]: the static capability. Every operation in
//!   [`algebra`](crate::algebra) is bounded by it, so a receiver that is not
//!   a set is rejected at compile time.
//! - [`Surface`] with [`is_set`] / [`ensure_set`]: the dynamic capability, a
//!   structural probe for values whose shape is only known at run time.
//!
//! `SetLike` is implemented for:
//!
//! - `std::collections::HashSet<T, S>` for any cloneable hasher `S`
//! - `indexmap::IndexSet<T, S>` (insertion-ordered iteration)
//!
//! # Examples
//!
//! ```rust
//! use set_algebra::capability::{SetLike, is_set};
//! use std::collections::HashSet;
//!
//! fn count<S: SetLike>(set: &S) -> usize {
//!     set.elements().count()
//! }
//!
//! let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(count(&set), 3);
//! assert!(is_set(Some(&set)));
//! ```

mod index_set;
mod set_like;
mod std_impls;
mod surface;

pub use set_like::{SetLike, SpeciesOf};
#[cfg(feature = "ahash")]
pub use std_impls::AHashSet;
#[cfg(feature = "fxhash")]
pub use std_impls::FxHashSet;
pub use surface::{Member, Record, SET_METHODS, SIZE_MEMBER, Surface, ensure_set, is_set};
