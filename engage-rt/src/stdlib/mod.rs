//! Built-in helper functions available to every Engage program
//!
//! These are thin wrappers the transpiler lowers standard-library
//! calls onto. Helpers that can fail in ways the program is expected
//! to handle return [`crate::EngageResult`]; the one genuinely
//! exceptional case, popping an empty vector, fails fast instead.

pub mod collections;
pub mod math;
pub mod strings;
