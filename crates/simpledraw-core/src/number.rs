//! Numeric literal values.
//!
//! SimpleDraw source numbers are either integers (`100`) or floats (`10.5`).
//! The distinction is kept through the whole pipeline so that exported
//! artifacts show the value the way it was written, while comparisons are
//! purely numeric.

use std::fmt;

use serde::{Serialize, Serializer};

/// A numeric value read from SimpleDraw source.
///
/// Equality is numeric and exact: `Number::Int(10) == Number::Float(10.0)`,
/// but an integer never equals a float that merely rounds to it
/// (`Int(2^53 + 1) != Float(2^53)`).
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// A literal without a decimal point.
    Int(i64),
    /// A literal with a decimal point.
    Float(f64),
}

impl Number {
    /// Returns `true` if this is a floating-point value.
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Returns the value as `f64`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    /// Returns the value as an integer, truncating any fractional part
    /// toward zero.
    ///
    /// Floats outside the `i64` range saturate to `i64::MIN` or `i64::MAX`;
    /// NaN becomes `0`.
    pub fn to_int(&self) -> i64 {
        match *self {
            Number::Int(value) => value,
            Number::Float(value) => value.trunc() as i64,
        }
    }

    /// Short name of the numeric kind (`"int"` or `"float"`).
    pub fn type_name(&self) -> &'static str {
        match self {
            Number::Int(_) => "int",
            Number::Float(_) => "float",
        }
    }
}

/// 2^63, the first float above the `i64` range.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison of an integer with a float, without rounding the integer.
fn int_eq_float(int: i64, float: f64) -> bool {
    float.fract() == 0.0 && (-I64_LIMIT..I64_LIMIT).contains(&float) && float as i64 == int
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(int), Number::Float(float)) | (Number::Float(float), Number::Int(int)) => {
                int_eq_float(int, float)
            }
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            // Debug formatting always keeps a fractional part (`10.0`).
            Number::Float(value) => write!(f, "{value:?}"),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Int(value) => serializer.serialize_i64(value),
            Number::Float(value) => serializer.serialize_f64(value),
        }
    }
}

impl From<Number> for svg::node::Value {
    fn from(number: Number) -> Self {
        Self::from(number.to_string())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_number_kinds() {
        assert!(Number::Int(3).is_int());
        assert!(!Number::Int(3).is_float());
        assert!(Number::Float(3.5).is_float());
        assert_eq!(Number::Int(3).type_name(), "int");
        assert_eq!(Number::Float(3.5).type_name(), "float");
    }

    #[test]
    fn test_number_numeric_equality() {
        assert_eq!(Number::Int(10), Number::Float(10.0));
        assert_eq!(Number::Float(10.0), Number::Int(10));
        assert_ne!(Number::Int(10), Number::Float(10.5));
        assert_ne!(Number::Int(10), Number::Int(11));
    }

    #[test]
    fn test_number_mixed_equality_is_exact() {
        let two_pow_53 = 9_007_199_254_740_992i64;
        assert_eq!(Number::Int(two_pow_53), Number::Float(two_pow_53 as f64));
        // 2^53 + 1 rounds to 2^53 as a float but is a different integer
        assert_ne!(Number::Int(two_pow_53 + 1), Number::Float(two_pow_53 as f64));
        assert_ne!(Number::Float(two_pow_53 as f64), Number::Int(two_pow_53 + 1));

        assert_eq!(Number::Int(i64::MIN), Number::Float(i64::MIN as f64));
        // i64::MAX as f64 is 2^63, one past the range
        assert_ne!(Number::Int(i64::MAX), Number::Float(i64::MAX as f64));
        assert_ne!(Number::Int(0), Number::Float(f64::NAN));
        assert_ne!(Number::Int(i64::MAX), Number::Float(f64::INFINITY));
    }

    #[test]
    fn test_number_to_int_truncates() {
        assert_eq!(Number::Float(100.9).to_int(), 100);
        assert_eq!(Number::Float(-2.7).to_int(), -2);
        assert_eq!(Number::Int(42).to_int(), 42);
    }

    #[test]
    fn test_number_to_int_saturates() {
        assert_eq!(Number::Float(1.0e20).to_int(), i64::MAX);
        assert_eq!(Number::Float(-1.0e20).to_int(), i64::MIN);
        assert_eq!(Number::Float(f64::NAN).to_int(), 0);
    }

    #[test]
    fn test_number_as_f64() {
        assert_approx_eq!(f64, Number::Int(7).as_f64(), 7.0);
        assert_approx_eq!(f64, Number::Float(20.3).as_f64(), 20.3);
    }

    #[test]
    fn test_number_display_keeps_kind() {
        assert_eq!(Number::Int(100).to_string(), "100");
        assert_eq!(Number::Float(10.0).to_string(), "10.0");
        assert_eq!(Number::Float(10.5).to_string(), "10.5");
    }

    #[test]
    fn test_number_into_svg_value() {
        let value: svg::node::Value = Number::Float(2.5).into();
        assert_eq!(value.to_string(), "2.5");
    }
}
