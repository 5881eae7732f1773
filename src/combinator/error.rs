//! Error types for combinator construction and evaluation.
//!
//! Construction errors ([`ArityError`]) are reported when a composition is
//! requested over zero operands. Evaluation errors ([`InvocationError`])
//! carry the name of the stage that failed inside a composed chain; stages
//! after the failing one are never invoked.

/// Represents an error when an n-ary combinator is built from zero operands.
///
/// Composing one operand is the identity composition and is always valid;
/// composing zero is rejected at construction time.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::{and_all, ArityError};
///
/// let empty: Vec<fn(&i32) -> bool> = Vec::new();
/// let error = and_all(empty).map(|_| ()).unwrap_err();
/// assert_eq!(error, ArityError { combinator: "and_all" });
/// assert_eq!(
///     format!("{}", error),
///     "and_all: composition requires at least one operand"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityError {
    /// The name of the combinator that was constructed without operands.
    pub combinator: &'static str,
}

impl std::fmt::Display for ArityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: composition requires at least one operand",
            self.combinator
        )
    }
}

impl std::error::Error for ArityError {}

/// Represents a failure raised by a stage inside a composed chain.
///
/// The `stage` field identifies the originating stage so the caller can
/// tell which part of a composition failed. Once a stage fails, the
/// remaining composed stages are skipped for that input.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::InvocationError;
///
/// let error = InvocationError {
///     stage: "parse",
///     message: "invalid digit found in string".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "stage `parse` failed: invalid digit found in string"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationError {
    /// The name of the stage that raised the failure.
    pub stage: &'static str,
    /// The failure rendered by the underlying error's `Display`.
    pub message: String,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "stage `{}` failed: {}", self.stage, self.message)
    }
}

impl std::error::Error for InvocationError {}

/// Represents errors that can occur while building or running combinators.
///
/// # Examples
///
/// ```rust
/// use seqflow::combinator::{ArityError, CombinatorError};
///
/// let error = CombinatorError::from(ArityError { combinator: "or_all" });
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinatorError {
    /// A composition was requested over zero operands.
    Arity(ArityError),
    /// A composed stage failed during evaluation.
    Invocation(InvocationError),
}

impl std::fmt::Display for CombinatorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arity(error) => write!(formatter, "{error}"),
            Self::Invocation(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CombinatorError {}

impl From<ArityError> for CombinatorError {
    fn from(error: ArityError) -> Self {
        Self::Arity(error)
    }
}

impl From<InvocationError> for CombinatorError {
    fn from(error: InvocationError) -> Self {
        Self::Invocation(error)
    }
}

// Stage failures surface from parallel pipeline stages, so they must be
// able to cross thread boundaries.
static_assertions::assert_impl_all!(InvocationError: Send, Sync, Clone);
static_assertions::assert_impl_all!(CombinatorError: Send, Sync, Clone);
