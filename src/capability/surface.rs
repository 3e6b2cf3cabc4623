//! Runtime structural probing of set-like values.
//!
//! Inside Rust, the [`SetLike`] bound already rejects receivers that are not
//! sets. [`Surface`] covers the remaining case: a value whose shape is only
//! known at run time (an object described by a plugin, a script host or a
//! configuration file) and has to be checked before it is treated as a set.

use std::fmt;

use indexmap::IndexMap;

use super::SetLike;
use crate::error::TypeContractError;

/// Methods a value must expose to count as set-like.
pub const SET_METHODS: [&str; 7] = [
    "has", "add", "for_each", "delete", "keys", "values", "entries",
];

/// The member holding the element count.
pub const SIZE_MEMBER: &str = "size";

/// The kind of a member found on a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Member {
    /// A callable member.
    Method,
    /// A numeric property.
    Number(f64),
}

/// A value whose members can be enumerated at run time.
pub trait Surface {
    /// Looks up the member called `name`.
    fn member(&self, name: &str) -> Option<Member>;
}

// =============================================================================
// Surface Implementations
// =============================================================================

impl<S: SetLike> Surface for S {
    #[allow(clippy::cast_precision_loss)]
    fn member(&self, name: &str) -> Option<Member> {
        if name == SIZE_MEMBER {
            Some(Member::Number(self.size() as f64))
        } else if SET_METHODS.contains(&name) {
            Some(Member::Method)
        } else {
            None
        }
    }
}

const LIST_METHODS: [&str; 5] = ["push", "pop", "contains", "iter", "for_each"];

#[allow(clippy::cast_precision_loss)]
fn list_member(length: usize, name: &str) -> Option<Member> {
    if name == "len" {
        Some(Member::Number(length as f64))
    } else if LIST_METHODS.contains(&name) {
        Some(Member::Method)
    } else {
        None
    }
}

impl<T> Surface for Vec<T> {
    fn member(&self, name: &str) -> Option<Member> {
        list_member(self.len(), name)
    }
}

// =============================================================================
// Record
// =============================================================================

/// A structural description of an externally supplied value.
///
/// Members keep the order in which they were declared.
///
/// # Examples
///
/// ```rust
/// use set_algebra::capability::{Member, Record, Surface};
///
/// let record = Record::new().with_method("has").with_number("size", 3.0);
/// assert_eq!(record.member("has"), Some(Member::Method));
/// assert_eq!(record.member("size"), Some(Member::Number(3.0)));
/// assert_eq!(record.member("add"), None);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Record {
    members: IndexMap<String, Member>,
}

impl Record {
    /// Creates a record with no members.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record exposing exactly the set-like members, with the
    /// given `size`.
    #[must_use]
    pub fn set_shaped(size: f64) -> Self {
        SET_METHODS
            .into_iter()
            .fold(Self::new(), |record, name| record.with_method(name))
            .with_number(SIZE_MEMBER, size)
    }

    /// Declares a callable member.
    #[must_use]
    pub fn with_method(self, name: impl Into<String>) -> Self {
        self.with_member(name, Member::Method)
    }

    /// Declares a numeric member.
    #[must_use]
    pub fn with_number(self, name: impl Into<String>, value: f64) -> Self {
        self.with_member(name, Member::Number(value))
    }

    /// Declares `name`, replacing any earlier declaration.
    #[must_use]
    pub fn with_member(mut self, name: impl Into<String>, member: Member) -> Self {
        self.members.insert(name.into(), member);
        self
    }

    /// Removes the member called `name`.
    #[must_use]
    pub fn without(mut self, name: &str) -> Self {
        self.members.shift_remove(name);
        self
    }
}

impl Surface for Record {
    fn member(&self, name: &str) -> Option<Member> {
        self.members.get(name).copied()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.members.iter()).finish()
    }
}

// =============================================================================
// Capability Check
// =============================================================================

fn is_count(value: f64) -> bool {
    value.is_finite() && value >= 0.0 && value.fract() == 0.0
}

/// Checks that `value` is set-like, naming the first member that is not.
///
/// The value must be present, expose every name in [`SET_METHODS`] as a
/// method, and expose [`SIZE_MEMBER`] as a non-negative integer.
///
/// # Errors
///
/// Returns [`TypeContractError`] with `member` set to `"value"` when `value`
/// is `None`, or to the first missing or malformed member otherwise.
///
/// # Examples
///
/// ```rust
/// use set_algebra::capability::{Record, ensure_set};
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = HashSet::new();
/// assert!(ensure_set(Some(&set)).is_ok());
///
/// let list = vec![1, 2, 3];
/// assert_eq!(ensure_set(Some(&list)).unwrap_err().member, "has");
///
/// let fractional = Record::set_shaped(1.5);
/// assert_eq!(ensure_set(Some(&fractional)).unwrap_err().member, "size");
/// ```
pub fn ensure_set(value: Option<&dyn Surface>) -> Result<(), TypeContractError> {
    let Some(value) = value else {
        return Err(TypeContractError { member: "value" });
    };

    if let Some(missing) = SET_METHODS
        .into_iter()
        .find(|name| !matches!(value.member(name), Some(Member::Method)))
    {
        return Err(TypeContractError { member: missing });
    }

    match value.member(SIZE_MEMBER) {
        Some(Member::Number(size)) if is_count(size) => Ok(()),
        _ => Err(TypeContractError {
            member: SIZE_MEMBER,
        }),
    }
}

/// Returns `true` if `value` is set-like.
///
/// # Examples
///
/// ```rust
/// use set_algebra::capability::is_set;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = [1, 2].into_iter().collect();
/// assert!(is_set(Some(&set)));
/// assert!(!is_set(Some(&vec![1, 2])));
/// assert!(!is_set(None));
/// ```
#[must_use]
pub fn is_set(value: Option<&dyn Surface>) -> bool {
    ensure_set(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case(0.0, true)]
    #[case(42.0, true)]
    #[case(-1.0, false)]
    #[case(2.5, false)]
    #[case(f64::NAN, false)]
    #[case(f64::INFINITY, false)]
    fn test_size_must_be_a_count(#[case] size: f64, #[case] expected: bool) {
        assert_eq!(is_set(Some(&Record::set_shaped(size))), expected);
    }

    #[rstest]
    fn test_each_missing_method_is_reported() {
        for name in SET_METHODS {
            let record = Record::set_shaped(0.0).without(name);
            assert_eq!(ensure_set(Some(&record)), Err(TypeContractError { member: name }));
        }
    }

    #[rstest]
    fn test_method_declared_as_number_is_rejected() {
        let record = Record::set_shaped(0.0).with_number("add", 1.0);
        assert_eq!(
            ensure_set(Some(&record)),
            Err(TypeContractError { member: "add" })
        );
    }

    #[rstest]
    fn test_size_declared_as_method_is_rejected() {
        let record = Record::set_shaped(0.0).with_method(SIZE_MEMBER);
        assert!(!is_set(Some(&record)));
    }

    #[rstest]
    fn test_set_surface_reports_size() {
        let set: HashSet<i32> = (0..5).collect();
        assert_eq!(set.member(SIZE_MEMBER), Some(Member::Number(5.0)));
        assert_eq!(set.member("len"), None);
    }

    #[rstest]
    fn test_list_is_not_set_like() {
        let list = vec![1, 2, 3];
        assert_eq!(list.member("len"), Some(Member::Number(3.0)));
        assert_eq!(
            ensure_set(Some(&list)),
            Err(TypeContractError { member: "has" })
        );
    }

    #[rstest]
    fn test_absent_value_is_not_set_like() {
        assert_eq!(ensure_set(None), Err(TypeContractError { member: "value" }));
    }
}
