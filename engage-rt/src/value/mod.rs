//! Dynamic values for compiled Engage programs
//!
//! Every Engage expression evaluates to a [`Value`]: a tagged union with
//! exactly one active variant. Operations that need a number or a string
//! derive one through the coercion views ([`Value::as_number`] and the
//! `Display` impl) instead of failing on a tag mismatch.

use std::collections::BTreeMap;
use std::fmt;

pub mod ops;

/// Dynamic runtime value
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// 64-bit floating point; the sole numeric representation
    Number(f64),
    /// Owned text
    Str(String),
    /// Ordered list, elements owned by value
    Vector(Vec<Value>),
    /// String-keyed association, keys unique and sorted
    Table(BTreeMap<String, Value>),
    /// Reserved tag, never constructed by the runtime itself
    Record,
    /// Reserved tag, never constructed by the runtime itself
    Function,
    /// Absent value; also what a moved-from value becomes
    #[default]
    None,
}

impl Value {
    /// Check if value is number
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if value is text
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Check if value is a vector
    pub fn is_vector(&self) -> bool {
        matches!(self, Value::Vector(_))
    }

    /// Check if value is a table
    pub fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    /// Check if value is the reserved record tag
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record)
    }

    /// Check if value is the reserved function tag
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function)
    }

    /// Check if value is none
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Numeric view of the value.
    ///
    /// Numbers yield their payload. Text is parsed as a decimal number
    /// after trimming surrounding whitespace; the whole remainder must
    /// parse, and anything that does not reads as `0.0` without error.
    /// That silent fallback is the language's rule, not an oversight.
    /// Every other tag reads as `0.0`.
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Str(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Try to borrow the text payload
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to borrow the vector elements
    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Value::Vector(items) => Some(items),
            _ => None,
        }
    }

    /// Try to borrow the vector elements mutably
    pub fn as_vector_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Vector(items) => Some(items),
            _ => None,
        }
    }

    /// Try to borrow the table entries
    pub fn as_table(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Table(entries) => Some(entries),
            _ => None,
        }
    }

    /// Try to borrow the table entries mutably
    pub fn as_table_mut(&mut self) -> Option<&mut BTreeMap<String, Value>> {
        match self {
            Value::Table(entries) => Some(entries),
            _ => None,
        }
    }

    /// Check if value is truthy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Vector(items) => !items.is_empty(),
            Value::Table(entries) => !entries.is_empty(),
            Value::Record => true,
            Value::Function => true,
            Value::None => false,
        }
    }

    /// Get type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Str(_) => "String",
            Value::Vector(_) => "Vector",
            Value::Table(_) => "Table",
            Value::Record => "Record",
            Value::Function => "Function",
            Value::None => "None",
        }
    }

    /// Move the value out, leaving `None` behind
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Vector(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Table(entries)
    }
}

/// Textual view of the value; the only rendering the language has.
///
/// Text passes through unquoted. A number with no fractional part prints
/// as plain integer digits when it fits a signed 64-bit integer,
/// everything else uses the default `f64` formatting. Containers and the
/// reserved tags collapse to `<object>`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) => {
                // i64::MAX as f64 rounds up to 2^63, so the upper bound
                // must stay exclusive for the cast to be exact
                if x.fract() == 0.0 && *x >= i64::MIN as f64 && *x < i64::MAX as f64 {
                    write!(f, "{}", *x as i64)
                } else {
                    write!(f, "{x}")
                }
            }
            Value::Str(s) => write!(f, "{s}"),
            Value::None => write!(f, "None"),
            Value::Vector(_) | Value::Table(_) | Value::Record | Value::Function => {
                write!(f, "<object>")
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::None, Value::None) => true,
            // Vectors, tables and the reserved tags never compare equal,
            // contents ignored. Structural equality is not part of the
            // language, so no Eq and no PartialOrd here.
            _ => false,
        }
    }
}
