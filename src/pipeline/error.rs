//! Error types for pipeline terminals.
//!
//! Terminal operations surface three kinds of failure: reducing an empty
//! sequence where at least one element is required, invoking a terminal on
//! a handle whose single pass has already run, and a stage or sink failure
//! raised while the pipeline executed.

use crate::combinator::InvocationError;

/// Represents a terminal reducer that requires at least one element being
/// invoked on an empty sequence.
///
/// # Examples
///
/// ```rust
/// use seqflow::pipeline::EmptySequenceError;
///
/// let error = EmptySequenceError { terminal: "max_by" };
/// assert_eq!(
///     format!("{}", error),
///     "max_by: sequence is empty, terminal requires at least one element"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySequenceError {
    /// The name of the terminal that required a non-empty sequence.
    pub terminal: &'static str,
}

impl std::fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: sequence is empty, terminal requires at least one element",
            self.terminal
        )
    }
}

impl std::error::Error for EmptySequenceError {}

/// Represents a second terminal invocation on a single-pass pipeline.
///
/// A pipeline handle carries its deferred computation exactly once; the
/// first terminal consumes it. This error is returned by every later
/// terminal call on the same handle.
///
/// # Examples
///
/// ```rust
/// use seqflow::pipeline::AlreadyConsumedError;
///
/// let error = AlreadyConsumedError { terminal: "collect" };
/// assert_eq!(
///     format!("{}", error),
///     "collect: pipeline already consumed. Run a terminal only once."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyConsumedError {
    /// The name of the terminal whose invocation found the handle consumed.
    pub terminal: &'static str,
}

impl std::fmt::Display for AlreadyConsumedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: pipeline already consumed. Run a terminal only once.",
            self.terminal
        )
    }
}

impl std::error::Error for AlreadyConsumedError {}

/// Represents errors that can occur when a pipeline terminal runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A reducer requiring at least one element ran on an empty sequence.
    Empty(EmptySequenceError),
    /// A terminal was invoked on an already-consumed handle.
    AlreadyConsumed(AlreadyConsumedError),
    /// A fallible stage or sink failed while the pipeline executed.
    Invocation(InvocationError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(error) => write!(formatter, "{error}"),
            Self::AlreadyConsumed(error) => write!(formatter, "{error}"),
            Self::Invocation(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<EmptySequenceError> for PipelineError {
    fn from(error: EmptySequenceError) -> Self {
        Self::Empty(error)
    }
}

impl From<AlreadyConsumedError> for PipelineError {
    fn from(error: AlreadyConsumedError) -> Self {
        Self::AlreadyConsumed(error)
    }
}

impl From<InvocationError> for PipelineError {
    fn from(error: InvocationError) -> Self {
        Self::Invocation(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_error_display() {
        let error = EmptySequenceError { terminal: "min_by" };
        assert_eq!(
            format!("{error}"),
            "min_by: sequence is empty, terminal requires at least one element"
        );
    }

    #[test]
    fn test_pipeline_error_wraps_invocation() {
        let error = PipelineError::from(InvocationError {
            stage: "widen",
            message: "overflow".to_string(),
        });
        assert_eq!(format!("{error}"), "stage `widen` failed: overflow");
    }
}
