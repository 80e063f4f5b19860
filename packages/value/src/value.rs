//! The Value type - the native representation of one document field.
//!
//! This is the untagged, in-process side of the codec. It maps one-to-one
//! onto the wire format's tag set, so both codec directions are total.
//!
//! # Design Notes
//!
//! - Uses `BTreeMap` for deterministic ordering (important for comparison)
//! - Uses `i64` for integers, covering the store's full signed-64 range
//! - Timestamps are carried as opaque ISO-8601 text; this layer does not
//!   parse or reformat them

use std::collections::BTreeMap;

/// A native value as an application sees it, untagged.
///
/// One variant per wire tag: scalars, timestamp, ordered array, and
/// string-keyed map, nested recursively.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absence of a value. A wire value with no tag also decodes to this.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// ISO-8601 timestamp text, carried opaquely.
    Timestamp(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Key-value map with string keys.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Create a null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Create a timestamp value from ISO-8601 text.
    pub fn timestamp(text: impl Into<String>) -> Self {
        Value::Timestamp(text.into())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Get the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer contents, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float contents, if this is a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the boolean contents, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the array contents, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get the map contents, if this is a map.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

/// Build a `BTreeMap<String, Value>` field map literal.
///
/// ```rust
/// use docwire_value::{fields, Value};
///
/// let data = fields! {
///     "name" => "Ada",
///     "score" => 42i64,
/// };
/// assert_eq!(data.get("name"), Some(&Value::from("Ada")));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::collections::BTreeMap::<::std::string::String, $crate::Value>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = ::std::collections::BTreeMap::new();
        $(map.insert(::std::string::String::from($key), $crate::Value::from($value));)+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;

    #[test]
    fn default_is_null() {
        assert_eq!(Value::default(), Value::Null);
        assert!(Value::null().is_null());
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(7i64), Value::Integer(7));
        assert_eq!(Value::from(7i32), Value::Integer(7));
        assert_eq!(Value::from(7.5), Value::Float(7.5));
        assert_eq!(Value::from("x"), Value::String("x".to_string()));
        assert_eq!(
            Value::from(vec![1i64, 2, 3]),
            Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
        );
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(7i64).as_integer(), Some(7));
        assert_eq!(Value::from(7.5).as_float(), Some(7.5));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::Null.as_str(), None);
        assert_eq!(Value::from("x").as_integer(), None);
    }

    #[test]
    fn fields_macro_builds_map() {
        let data = fields! {
            "name" => "Ada",
            "active" => true,
        };
        assert_eq!(data.len(), 2);
        assert_eq!(data.get("name"), Some(&Value::from("Ada")));
        assert_eq!(data.get("active"), Some(&Value::Bool(true)));

        let empty = fields! {};
        assert!(empty.is_empty());
    }
}
