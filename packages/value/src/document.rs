//! The Document type - one decoded record.

use std::collections::BTreeMap;

use crate::Value;

/// One decoded document: its short id plus the decoded field map.
///
/// The caller owns a `Document` once the codec returns it; the codec
/// keeps no reference to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    /// The short id, extracted from the final segment of the resource
    /// path. Empty only for a document decoded from an empty path.
    pub id: String,
    /// Decoded field values.
    pub data: BTreeMap<String, Value>,
}

impl Document {
    /// Create a document from an id and field map.
    pub fn new(id: impl Into<String>, data: BTreeMap<String, Value>) -> Self {
        Document {
            id: id.into(),
            data,
        }
    }

    /// Get a field value by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;

    #[test]
    fn field_access() {
        let doc = Document::new("abc123", fields! { "name" => "Ada" });
        assert_eq!(doc.id, "abc123");
        assert_eq!(doc.get("name"), Some(&Value::from("Ada")));
        assert_eq!(doc.get("missing"), None);
    }
}
