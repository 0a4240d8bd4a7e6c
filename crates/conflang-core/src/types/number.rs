//! Numeric scalar type
//!
//! YAML numbers are either integers (signed or, past `i64::MAX`, unsigned)
//! or floating point. The `Display` impl is the canonical base-10 form used
//! in emitted constant declarations.

use std::fmt;

/// Numeric scalar value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed integer
    Int(i64),
    /// Unsigned integer that does not fit in `i64`
    UInt(u64),
    /// Floating point number
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::UInt(n) => write!(f, "{}", n),
            Number::Float(x) if x.is_nan() => f.write_str("nan"),
            Number::Float(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_negative() { "-inf" } else { "inf" })
            }
            // Debug keeps a fractional part on whole floats (1.0, not 1)
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Number::Int(n),
            Err(_) => Number::UInt(n),
        }
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}
