//! Structured-query wire types.
//!
//! The `:runQuery` endpoint takes a nested request shape and answers
//! with a stream of result envelopes, not all of which carry a
//! document. The JSON spellings here must match the store exactly.

use serde::{Deserialize, Serialize};

use docwire_value::wire::{WireDocument, WireValue};

/// Comparison operator for a field filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOp {
    #[serde(rename = "EQUAL")]
    Equal,
    #[serde(rename = "NOT_EQUAL")]
    NotEqual,
}

impl FilterOp {
    /// Map an operator spelling to a `FilterOp`.
    ///
    /// `"=="` and `"!="` map to their operators; anything else falls
    /// back to `Equal`. The fallback is deliberate: callers pass
    /// operator text straight from request parameters, and an unknown
    /// operator degrades to the common case instead of failing the
    /// query.
    pub fn parse(op: &str) -> Self {
        match op {
            "!=" => FilterOp::NotEqual,
            _ => FilterOp::Equal,
        }
    }
}

/// Body of a `:runQuery` request.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunQueryRequest {
    pub structured_query: StructuredQuery,
}

#[derive(Clone, Debug, Serialize)]
pub struct StructuredQuery {
    pub from: Vec<CollectionSelector>,
    #[serde(rename = "where")]
    pub filter: FilterClause,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSelector {
    pub collection_id: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterClause {
    pub field_filter: FieldFilter,
}

#[derive(Clone, Debug, Serialize)]
pub struct FieldFilter {
    pub field: FieldReference,
    pub op: FilterOp,
    pub value: WireValue,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReference {
    pub field_path: String,
}

impl RunQueryRequest {
    /// Build a single-collection equality/inequality query.
    pub fn field_filter(
        collection_id: impl Into<String>,
        field_path: impl Into<String>,
        op: FilterOp,
        value: WireValue,
    ) -> Self {
        RunQueryRequest {
            structured_query: StructuredQuery {
                from: vec![CollectionSelector {
                    collection_id: collection_id.into(),
                }],
                filter: FilterClause {
                    field_filter: FieldFilter {
                        field: FieldReference {
                            field_path: field_path.into(),
                        },
                        op,
                        value,
                    },
                },
            },
        }
    }
}

/// One entry in a `:runQuery` response. Entries without a `document`
/// payload are query-progress markers and carry no data.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub document: Option<WireDocument>,
}
