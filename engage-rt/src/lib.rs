//! Engage Runtime Library
//!
//! Runtime support for natively compiled Engage programs: the dynamic
//! [`Value`] type with its coercion views, truthiness and operators, the
//! explicit [`EngageResult`] wrapper for fallible library calls, and the
//! standard-library helpers the transpiler lowers built-in calls onto.
//!
//! The emitted program drives everything. This crate holds no global
//! state, spawns no threads and prints nothing; rendering a value means
//! producing its textual view and handing the string back.

pub mod error;
pub mod result;
pub mod stdlib;
pub mod value;

pub use error::{ErrorKind, RtResult, RuntimeError};
pub use result::EngageResult;
pub use value::Value;
