//! Wire-format structures, exactly as the store spells them in JSON.
//!
//! A wire value is a tagged union: one JSON object with exactly one tag
//! field populated (`stringValue`, `integerValue`, ...). The contract
//! requires decode to stay total even for malformed producers, which
//! rules out a serde enum:
//!
//! - an object with zero tags must decode to null, not fail
//! - an object with several tags must resolve by a fixed precedence
//!
//! So `WireValue` is a struct of eight optional tag fields, and the
//! precedence lives in `convert::wire_to_value`. The constructors here
//! each set exactly one tag; every encode path goes through them.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// One value as it appears on the wire. At most one tag is populated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,

    /// Decimal text representation of a signed integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integer_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,

    /// Serialized as `"nullValue": null`. The custom deserializer keeps
    /// the tag's presence, which a plain `Option` would collapse to
    /// absence.
    #[serde(
        default,
        deserialize_with = "deserialize_null_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub null_value: Option<()>,

    /// ISO-8601 timestamp text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_value: Option<WireArray>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_value: Option<WireMap>,
}

/// The payload of an `arrayValue` tag. An absent `values` list means an
/// empty array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WireArray {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<WireValue>>,
}

/// The payload of a `mapValue` tag. An absent `fields` map means an
/// empty map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WireMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, WireValue>>,
}

/// One document as it appears on the wire: a full resource name plus an
/// optional field map. Server-set metadata fields (`createTime`,
/// `updateTime`) are ignored on decode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WireDocument {
    /// The full resource path; the final segment is the short id.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, WireValue>>,
}

impl WireValue {
    /// A value with the `stringValue` tag.
    pub fn string(v: impl Into<String>) -> Self {
        WireValue {
            string_value: Some(v.into()),
            ..Default::default()
        }
    }

    /// A value with the `integerValue` tag, as decimal text.
    pub fn integer(v: i64) -> Self {
        WireValue {
            integer_value: Some(v.to_string()),
            ..Default::default()
        }
    }

    /// A value with the `doubleValue` tag.
    pub fn double(v: f64) -> Self {
        WireValue {
            double_value: Some(v),
            ..Default::default()
        }
    }

    /// A value with the `booleanValue` tag.
    pub fn boolean(v: bool) -> Self {
        WireValue {
            boolean_value: Some(v),
            ..Default::default()
        }
    }

    /// A value with the `nullValue` tag.
    pub fn null() -> Self {
        WireValue {
            null_value: Some(()),
            ..Default::default()
        }
    }

    /// A value with the `timestampValue` tag.
    pub fn timestamp(v: impl Into<String>) -> Self {
        WireValue {
            timestamp_value: Some(v.into()),
            ..Default::default()
        }
    }

    /// A value with the `arrayValue` tag.
    pub fn array(values: Vec<WireValue>) -> Self {
        WireValue {
            array_value: Some(WireArray {
                values: Some(values),
            }),
            ..Default::default()
        }
    }

    /// A value with the `mapValue` tag.
    pub fn map(fields: BTreeMap<String, WireValue>) -> Self {
        WireValue {
            map_value: Some(WireMap {
                fields: Some(fields),
            }),
            ..Default::default()
        }
    }
}

/// Deserialize `"nullValue": null` to `Some(())`, preserving that the
/// tag was present at all.
fn deserialize_null_tag<'de, D>(deserializer: D) -> Result<Option<()>, D::Error>
where
    D: Deserializer<'de>,
{
    serde::de::IgnoredAny::deserialize(deserializer)?;
    Ok(Some(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_value_json_spelling() {
        let json = serde_json::to_value(WireValue::string("Ada")).unwrap();
        assert_eq!(json, serde_json::json!({"stringValue": "Ada"}));
    }

    #[test]
    fn integer_value_is_decimal_text() {
        let json = serde_json::to_value(WireValue::integer(7)).unwrap();
        assert_eq!(json, serde_json::json!({"integerValue": "7"}));
    }

    #[test]
    fn null_value_serializes_as_json_null() {
        let json = serde_json::to_value(WireValue::null()).unwrap();
        assert_eq!(json, serde_json::json!({"nullValue": null}));
    }

    #[test]
    fn null_tag_survives_deserialization() {
        let wire: WireValue = serde_json::from_value(serde_json::json!({"nullValue": null}))
            .unwrap();
        assert_eq!(wire.null_value, Some(()));
        assert_eq!(wire, WireValue::null());
    }

    #[test]
    fn zero_tag_object_deserializes() {
        let wire: WireValue = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(wire, WireValue::default());
        assert_eq!(wire.null_value, None);
    }

    #[test]
    fn array_and_map_nesting() {
        let wire = WireValue::array(vec![WireValue::integer(1), WireValue::string("x")]);
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "arrayValue": {
                    "values": [{"integerValue": "1"}, {"stringValue": "x"}]
                }
            })
        );

        let back: WireValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, wire);
    }

    #[test]
    fn document_ignores_server_metadata() {
        let doc: WireDocument = serde_json::from_value(serde_json::json!({
            "name": "projects/p/databases/(default)/documents/quizzes/abc123",
            "fields": {"title": {"stringValue": "Algebra"}},
            "createTime": "2024-01-01T00:00:00Z",
            "updateTime": "2024-01-02T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(
            doc.name,
            "projects/p/databases/(default)/documents/quizzes/abc123"
        );
        let fields = doc.fields.unwrap();
        assert_eq!(fields.get("title"), Some(&WireValue::string("Algebra")));
    }

    #[test]
    fn document_without_fields_or_name() {
        let doc: WireDocument = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(doc.name, "");
        assert_eq!(doc.fields, None);
    }
}
