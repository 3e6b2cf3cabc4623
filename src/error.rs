//! Error types for set algebra operations.
//!
//! Two kinds of failure are reported by this crate itself:
//!
//! - [`TypeContractError`]: a dynamically probed value is not set-like.
//! - [`ArityError`]: a combining operation received no operands.
//!
//! Errors raised by user callables in the `try_*` transforms are returned
//! as-is and never wrapped in [`SetAlgebraError`].

/// Represents a value that failed the set-like capability check.
///
/// # Examples
///
/// ```rust
/// use set_algebra::error::TypeContractError;
///
/// let error = TypeContractError { member: "has" };
/// assert_eq!(
///     format!("{error}"),
///     "value is not set-like: member `has` is missing or malformed"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeContractError {
    /// The first member that was missing or had the wrong shape.
    pub member: &'static str,
}

impl std::fmt::Display for TypeContractError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "value is not set-like: member `{}` is missing or malformed",
            self.member
        )
    }
}

impl std::error::Error for TypeContractError {}

/// Represents a combining operation called with too few operands.
///
/// # Examples
///
/// ```rust
/// use set_algebra::error::ArityError;
///
/// let error = ArityError { operation: "union", minimum: 1 };
/// assert_eq!(
///     format!("{error}"),
///     "union: expected at least 1 operand(s) besides the receiver"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArityError {
    /// The name of the operation that was called.
    pub operation: &'static str,
    /// The minimum number of operands the operation accepts.
    pub minimum: usize,
}

impl std::fmt::Display for ArityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: expected at least {} operand(s) besides the receiver",
            self.operation, self.minimum
        )
    }
}

impl std::error::Error for ArityError {}

/// Represents errors raised by the set algebra layer.
///
/// # Examples
///
/// ```rust
/// use set_algebra::error::{ArityError, SetAlgebraError};
///
/// let error = SetAlgebraError::Arity(ArityError { operation: "xor", minimum: 1 });
/// assert!(format!("{error}").starts_with("xor:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetAlgebraError {
    /// A value did not satisfy the set-like capability.
    TypeContract(TypeContractError),
    /// A combining operation received no operands.
    Arity(ArityError),
}

impl std::fmt::Display for SetAlgebraError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeContract(error) => write!(formatter, "{error}"),
            Self::Arity(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SetAlgebraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TypeContract(error) => Some(error),
            Self::Arity(error) => Some(error),
        }
    }
}

impl From<TypeContractError> for SetAlgebraError {
    fn from(error: TypeContractError) -> Self {
        Self::TypeContract(error)
    }
}

impl From<ArityError> for SetAlgebraError {
    fn from(error: ArityError) -> Self {
        Self::Arity(error)
    }
}
