//! Matcher misuse errors.
//!
//! These are programmer errors, not match failures: a primitive or group
//! that does not match is an ordinary `false`. Every check runs before the
//! engine changes any state, so a misused engine is left as it was.

/// Misuse of the runtime-checked [`Matcher`](crate::Matcher) surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// `and()`/`or()` with no preceding operand in the current group.
    #[error("operator without a preceding operand")]
    UnstartedOperator,
    /// `result()` before anything was attempted.
    #[error("result requested without trying to match anything")]
    UnstartedResult,
    /// `end()` with no open group.
    #[error("end without a matching begin")]
    UnbalancedEnd,
    /// `result()` while groups are still open.
    #[error("result requested with {depth} group(s) still open")]
    UnclosedGroup { depth: usize },
}
