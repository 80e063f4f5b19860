//! The Scalar type - the filter protocol's value subset.

use crate::Value;

/// A scalar value usable in a structured-query field filter.
///
/// The filter protocol only compares against strings, numbers, and
/// booleans; arrays, maps, and null are not valid filter operands. Taking
/// `Scalar` instead of `Value` on the filter path enforces that at the
/// type level.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// UTF-8 string.
    String(String),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::String(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Integer(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Integer(v as i64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::String(v) => Value::String(v),
            Scalar::Integer(v) => Value::Integer(v),
            Scalar::Float(v) => Value::Float(v),
            Scalar::Bool(v) => Value::Bool(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_conversions() {
        assert_eq!(Scalar::from("x"), Scalar::String("x".to_string()));
        assert_eq!(Scalar::from(7i64), Scalar::Integer(7));
        assert_eq!(Scalar::from(7i32), Scalar::Integer(7));
        assert_eq!(Scalar::from(7.5), Scalar::Float(7.5));
        assert_eq!(Scalar::from(true), Scalar::Bool(true));
    }

    #[test]
    fn widens_to_value() {
        assert_eq!(Value::from(Scalar::from("x")), Value::from("x"));
        assert_eq!(Value::from(Scalar::from(7i64)), Value::Integer(7));
    }
}
