//! Conversions between wire values and native values.
//!
//! Both directions are total functions. Decode tolerates malformed
//! producers (zero tags, multiple tags, unparseable integer text)
//! instead of failing; encode covers every `Value` variant because the
//! sum type is closed.

use std::collections::BTreeMap;

use crate::wire::{WireDocument, WireValue};
use crate::{Document, ResourcePath, Scalar, Value};

/// Decode one wire value to a native value.
///
/// Tag precedence when a malformed producer sets more than one:
/// string, integer, double, boolean, null, timestamp, array, map.
/// A value with no tag at all decodes to `Null`.
pub fn wire_to_value(wire: WireValue) -> Value {
    if let Some(s) = wire.string_value {
        return Value::String(s);
    }
    if let Some(text) = wire.integer_value {
        return decode_integer_text(&text);
    }
    if let Some(f) = wire.double_value {
        return Value::Float(f);
    }
    if let Some(b) = wire.boolean_value {
        return Value::Bool(b);
    }
    if wire.null_value.is_some() {
        return Value::Null;
    }
    if let Some(ts) = wire.timestamp_value {
        return Value::Timestamp(ts);
    }
    if let Some(array) = wire.array_value {
        let values = array.values.unwrap_or_default();
        return Value::Array(values.into_iter().map(wire_to_value).collect());
    }
    if let Some(map) = wire.map_value {
        let fields = map.fields.unwrap_or_default();
        return Value::Map(
            fields
                .into_iter()
                .map(|(k, v)| (k, wire_to_value(v)))
                .collect(),
        );
    }
    Value::Null
}

/// Parse `integerValue` text: exact `i64` when it fits, `f64`
/// approximation for text beyond that range, `Null` for garbage.
fn decode_integer_text(text: &str) -> Value {
    if let Ok(i) = text.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = text.parse::<f64>() {
        return Value::Float(f);
    }
    Value::Null
}

/// Encode one native value to a wire value.
///
/// A float that is mathematically a whole number representable in `i64`
/// encodes with the `integerValue` tag, so `Float(7.0)` re-enters as
/// `Integer(7)` on the way back. This is the protocol's known lossy
/// edge, kept rather than papered over.
pub fn value_to_wire(value: Value) -> WireValue {
    match value {
        Value::Null => WireValue::null(),
        Value::String(s) => WireValue::string(s),
        Value::Integer(i) => WireValue::integer(i),
        Value::Float(f) => encode_float(f),
        Value::Bool(b) => WireValue::boolean(b),
        Value::Timestamp(ts) => WireValue::timestamp(ts),
        Value::Array(values) => {
            WireValue::array(values.into_iter().map(value_to_wire).collect())
        }
        Value::Map(fields) => WireValue::map(
            fields
                .into_iter()
                .map(|(k, v)| (k, value_to_wire(v)))
                .collect(),
        ),
    }
}

/// Encode a filter scalar. Same float collapse rule as `value_to_wire`.
pub fn scalar_to_wire(scalar: Scalar) -> WireValue {
    match scalar {
        Scalar::String(s) => WireValue::string(s),
        Scalar::Integer(i) => WireValue::integer(i),
        Scalar::Float(f) => encode_float(f),
        Scalar::Bool(b) => WireValue::boolean(b),
    }
}

fn encode_float(f: f64) -> WireValue {
    if let Some(i) = exact_integer(f) {
        return WireValue::integer(i);
    }
    WireValue::double(f)
}

/// The `i64` a float is exactly equal to, if there is one.
fn exact_integer(f: f64) -> Option<i64> {
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    // Casting checks the range; the round trip checks exactness.
    let i = f as i64;
    if i as f64 == f {
        Some(i)
    } else {
        None
    }
}

/// Decode one wire document: the short id is the final path segment,
/// the data is every field decoded. Never fails; an empty `name` yields
/// an empty id, an absent `fields` yields an empty map.
pub fn decode_document(doc: WireDocument) -> Document {
    let id = ResourcePath::parse(&doc.name).document_id().to_string();
    let data = doc
        .fields
        .unwrap_or_default()
        .into_iter()
        .map(|(k, v)| (k, wire_to_value(v)))
        .collect();
    Document { id, data }
}

/// Encode a field map for document creation or update.
///
/// There is no full document-encoding counterpart to
/// [`decode_document`]: the resource path is always assigned by the
/// store, so a write only ever carries fields.
pub fn encode_fields(data: BTreeMap<String, Value>) -> BTreeMap<String, WireValue> {
    data.into_iter()
        .map(|(k, v)| (k, value_to_wire(v)))
        .collect()
}
