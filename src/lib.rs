//! # set-algebra
//!
//! Set algebra and functional transforms for hash-based set containers.
//!
//! ## Overview
//!
//! The standard library's sets offer binary `union`, `intersection` and
//! friends, each fixed to its own concrete type. This library adds an n-ary,
//! container-generic layer on top of any type implementing
//! [`SetLike`](capability::SetLike):
//!
//! - **Combining operations**: union, intersect, xor, subtract over any
//!   number of operands, which need only be iterable
//! - **Functional transforms**: map, filter, some, every, find
//! - **Bulk mutators**: `add_elements`, `remove_elements`
//! - **Species**: results are built in a container type chosen by the
//!   receiver, so wrapper types get results of their own type
//! - **Capability probing**: `is_set` for values only known at run time
//!
//! Every operation is eager: it materializes a complete result before
//! returning.
//!
//! ## Feature Flags
//!
//! - `fxhash`: `FxHashSet` alias using `rustc-hash`
//! - `ahash`: `AHashSet` alias using `ahash`
//! - `log`: emit a `trace` record for every operation
//!
//! ## Example
//!
//! ```rust
//! use set_algebra::prelude::*;
//! use std::collections::HashSet;
//!
//! let set_a: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! let set_b: HashSet<i32> = [2, 3, 4].into_iter().collect();
//!
//! let xor = set_a.xor([&set_b]).unwrap();
//! let expected = set_a
//!     .unite([&set_b])
//!     .unwrap()
//!     .subtract([set_a.intersect([&set_b]).unwrap()]);
//! assert_eq!(xor, expected);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Emits a trace record when the `log` feature is enabled.
macro_rules! trace_operation {
    ($($argument:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($argument)*);
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports the capability and algebra traits.
///
/// # Usage
///
/// ```rust
/// use set_algebra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::SetAlgebra;
    pub use crate::capability::{SetLike, SpeciesOf, Surface, is_set};
    pub use crate::error::SetAlgebraError;
    pub use crate::value::SameValueZero;
}

pub mod algebra;
pub mod callback;
pub mod capability;
pub mod error;
pub mod species;
pub mod value;
