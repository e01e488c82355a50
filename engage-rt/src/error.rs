//! Runtime errors raised by compiled Engage programs
//!
//! These are the fail-fast failures: the operation aborts and the error
//! propagates to the program driver. The lenient coercions (non-numeric
//! text reading as `0.0`) never come through here, and library-style
//! failures travel as [`crate::EngageResult::Error`] values instead.

use thiserror::Error;

/// Runtime error during program execution
#[derive(Debug, Clone, Error)]
#[error("Runtime error: {message}")]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Kinds of runtime errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Division where the divisor's numeric view is zero
    DivisionByZero,
    /// Pop from an empty vector
    EmptyPop,
}

impl RuntimeError {
    pub fn division_by_zero() -> Self {
        RuntimeError {
            kind: ErrorKind::DivisionByZero,
            message: "division by zero".to_string(),
        }
    }

    pub fn empty_pop() -> Self {
        RuntimeError {
            kind: ErrorKind::EmptyPop,
            message: "cannot pop from empty vector".to_string(),
        }
    }
}

/// Result type for fail-fast runtime operations
pub type RtResult<T> = Result<T, RuntimeError>;
