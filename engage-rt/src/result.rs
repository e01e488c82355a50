//! Explicit results for fallible library operations
//!
//! Engage surfaces library failures as ordinary values the program
//! inspects, not as propagated errors. [`EngageResult`] is that value:
//! a success payload or a failure message, nothing else. Reading the
//! wrong side is a programming error in the emitted code and aborts
//! immediately, the same contract as [`Result::unwrap`].

/// Outcome of a fallible library operation
#[derive(Debug, Clone, PartialEq)]
pub enum EngageResult<T> {
    /// Success carrying the payload
    Ok(T),
    /// Failure carrying a human-readable message
    Error(String),
}

impl<T> EngageResult<T> {
    /// Check for the success state
    pub fn is_ok(&self) -> bool {
        matches!(self, EngageResult::Ok(_))
    }

    /// Check for the failure state
    pub fn is_error(&self) -> bool {
        matches!(self, EngageResult::Error(_))
    }

    /// Take the success payload.
    ///
    /// # Panics
    ///
    /// Panics when the result is a failure, quoting its message.
    pub fn unwrap(self) -> T {
        match self {
            EngageResult::Ok(value) => value,
            EngageResult::Error(message) => {
                panic!("Attempted to access value of error result: {message}")
            }
        }
    }

    /// Take the failure message.
    ///
    /// # Panics
    ///
    /// Panics when the result is a success.
    pub fn unwrap_error(self) -> String {
        match self {
            EngageResult::Ok(_) => {
                panic!("Attempted to access error of ok result")
            }
            EngageResult::Error(message) => message,
        }
    }

    /// Take the success payload, or the given default on failure
    pub fn value_or(self, default: T) -> T {
        match self {
            EngageResult::Ok(value) => value,
            EngageResult::Error(_) => default,
        }
    }
}
