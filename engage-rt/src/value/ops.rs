//! Arithmetic and comparison over dynamic values
//!
//! Operands are never rejected for their tag: each operator coerces
//! through the numeric or textual view as needed, in left-to-right
//! order. Division is the only operation here that can fail.

use crate::error::{RtResult, RuntimeError};
use crate::value::Value;

impl Value {
    /// Binary `+`. If either operand is text the result is the two
    /// textual views concatenated, left then right; otherwise the sum
    /// of the numeric views.
    pub fn add(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Str(_), _) | (_, Value::Str(_)) => {
                Value::Str(format!("{self}{other}"))
            }
            _ => Value::Number(self.as_number() + other.as_number()),
        }
    }

    /// Binary `-` over the numeric views
    pub fn sub(&self, other: &Value) -> Value {
        Value::Number(self.as_number() - other.as_number())
    }

    /// Binary `*` over the numeric views
    pub fn mul(&self, other: &Value) -> Value {
        Value::Number(self.as_number() * other.as_number())
    }

    /// Binary `/` over the numeric views.
    ///
    /// Fails fast when the divisor's numeric view is zero, which also
    /// covers text divisors that fall back to `0.0`.
    pub fn div(&self, other: &Value) -> RtResult<Value> {
        let divisor = other.as_number();
        if divisor == 0.0 {
            return Err(RuntimeError::division_by_zero());
        }
        Ok(Value::Number(self.as_number() / divisor))
    }

    /// Binary `<` over the numeric views. Ordering is always numeric,
    /// even between two text values; there is no lexical ordering in
    /// the language.
    pub fn lt(&self, other: &Value) -> bool {
        self.as_number() < other.as_number()
    }

    /// Binary `<=` over the numeric views
    pub fn le(&self, other: &Value) -> bool {
        self.as_number() <= other.as_number()
    }

    /// Binary `>` over the numeric views
    pub fn gt(&self, other: &Value) -> bool {
        self.as_number() > other.as_number()
    }

    /// Binary `>=` over the numeric views
    pub fn ge(&self, other: &Value) -> bool {
        self.as_number() >= other.as_number()
    }
}
