//! Math helpers
//!
//! Thin wrappers over plain `f64`; the transpiler feeds them the numeric
//! views of its operands. Only `sqrt` can fail.

use crate::result::EngageResult;

/// Square root. Negative input is a domain failure.
pub fn sqrt(x: f64) -> EngageResult<f64> {
    if x < 0.0 {
        return EngageResult::Error(
            "sqrt() domain error: cannot calculate square root of negative number.".to_string(),
        );
    }
    EngageResult::Ok(x.sqrt())
}

/// Raise `base` to the power `exp`
pub fn pow(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

/// Absolute value
pub fn abs(x: f64) -> f64 {
    x.abs()
}

/// Smaller of the two
pub fn min(a: f64, b: f64) -> f64 {
    a.min(b)
}

/// Larger of the two
pub fn max(a: f64, b: f64) -> f64 {
    a.max(b)
}

/// Round down
pub fn floor(x: f64) -> f64 {
    x.floor()
}

/// Round up
pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

/// Round to nearest, halves away from zero
pub fn round(x: f64) -> f64 {
    x.round()
}

/// Uniform random sample in the half-open interval [0, 1), from a
/// lazily seeded thread-local generator
pub fn random() -> f64 {
    rand::random()
}

/// Sine of an angle in radians
pub fn sin(x: f64) -> f64 {
    x.sin()
}

/// Cosine of an angle in radians
pub fn cos(x: f64) -> f64 {
    x.cos()
}

/// Tangent of an angle in radians
pub fn tan(x: f64) -> f64 {
    x.tan()
}
